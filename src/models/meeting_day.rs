use crate::models::WeekdayTag;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeetingDay {
    pub date: NaiveDate,
    #[serde(rename = "day")]
    pub weekday_tag: WeekdayTag,
}
