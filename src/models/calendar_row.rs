/// Raw row from the registrar calendar: a free-text date range and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    pub date_str: String,
    pub label: String,
}

impl CalendarRow {
    pub fn new(date_str: &str, label: &str) -> Self {
        Self {
            date_str: date_str.to_string(),
            label: label.to_string(),
        }
    }
}
