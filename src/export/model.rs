// src/export/model.rs

use crate::models::{DateEvent, MeetingDay, ScheduleRow};

const DATE_FMT: &str = "%Y-%m-%d";

/// A record that can be laid out as a row of text cells.
pub trait TableRecord {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl TableRecord for DateEvent {
    fn headers() -> Vec<&'static str> {
        vec!["date", "event"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.date.format(DATE_FMT).to_string(), self.label.clone()]
    }
}

impl TableRecord for MeetingDay {
    fn headers() -> Vec<&'static str> {
        vec!["date", "day"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FMT).to_string(),
            self.weekday_tag.to_string(),
        ]
    }
}

impl TableRecord for ScheduleRow {
    fn headers() -> Vec<&'static str> {
        vec!["date", "day", "topic", "reading", "academic calendar"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FMT).to_string(),
            self.weekday_tag.to_string(),
            self.topic.clone(),
            self.reading.clone(),
            self.academic_event.clone(),
        ]
    }
}
