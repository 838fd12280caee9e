use crate::models::{MeetingDay, WeekdayTag};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the final class schedule.
///
/// `topic` and `reading` are left empty for manual editing downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    #[serde(rename = "day")]
    pub weekday_tag: WeekdayTag,
    pub topic: String,
    pub reading: String,
    #[serde(rename = "academic calendar")]
    pub academic_event: String,
}

impl ScheduleRow {
    pub fn from_meeting(meeting: &MeetingDay, academic_event: Option<&str>) -> Self {
        Self {
            date: meeting.date,
            weekday_tag: meeting.weekday_tag,
            topic: String::new(),
            reading: String::new(),
            academic_event: academic_event.unwrap_or_default().to_string(),
        }
    }

    pub fn has_event(&self) -> bool {
        !self.academic_event.is_empty()
    }
}
