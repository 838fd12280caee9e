use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day carrying an academic-calendar label.
///
/// A range like "August 25-29" expands into five of these sharing the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEvent {
    pub date: NaiveDate,
    #[serde(rename = "event")]
    pub label: String,
}

impl DateEvent {
    pub fn new(date: NaiveDate, label: &str) -> Self {
        Self {
            date,
            label: label.to_string(),
        }
    }
}
