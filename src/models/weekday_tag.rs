use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Weekdays on which the class meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeekdayTag {
    #[serde(rename = "Tu.")]
    Tu,
    #[serde(rename = "Th.")]
    Th,
}

impl WeekdayTag {
    /// Map a chrono weekday to a meeting tag (None for non-meeting days).
    pub fn from_weekday(w: Weekday) -> Option<Self> {
        match w {
            Weekday::Tue => Some(WeekdayTag::Tu),
            Weekday::Thu => Some(WeekdayTag::Th),
            _ => None,
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            WeekdayTag::Tu => Weekday::Tue,
            WeekdayTag::Th => Weekday::Thu,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayTag::Tu => "Tu.",
            WeekdayTag::Th => "Th.",
        }
    }
}

impl fmt::Display for WeekdayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
