//! Joins class meetings with academic-calendar events.

use crate::errors::{AppError, AppResult};
use crate::models::{DateEvent, MeetingDay, ScheduleRow};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which label a meeting gets when several events fall on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Keep the first label seen in calendar order.
    #[default]
    First,
    /// Keep the last label seen in calendar order.
    Last,
    /// Join all distinct labels with "; ".
    Concat,
    /// Refuse to pick: conflicting labels are an error.
    Strict,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::First => "first",
            TieBreak::Last => "last",
            TieBreak::Concat => "concat",
            TieBreak::Strict => "strict",
        }
    }
}

pub const CONCAT_SEPARATOR: &str = "; ";

pub struct ScheduleMerger {
    policy: TieBreak,
}

impl ScheduleMerger {
    pub fn new(policy: TieBreak) -> Self {
        Self { policy }
    }

    /// One row per meeting, in meeting order.
    pub fn merge(
        &self,
        meetings: &[MeetingDay],
        events: &[DateEvent],
    ) -> AppResult<Vec<ScheduleRow>> {
        let index = self.index(events)?;

        Ok(meetings
            .iter()
            .map(|m| ScheduleRow::from_meeting(m, index.get(&m.date).map(String::as_str)))
            .collect())
    }

    /// date -> resolved label
    fn index(&self, events: &[DateEvent]) -> AppResult<BTreeMap<NaiveDate, String>> {
        if self.policy == TieBreak::Last {
            return Ok(events
                .iter()
                .map(|e| (e.date, e.label.clone()))
                .collect());
        }

        let mut index = BTreeMap::new();

        for (date, labels) in group_labels(events) {
            let label = match self.policy {
                // Last returned early above
                TieBreak::First | TieBreak::Last => labels[0].to_string(),
                TieBreak::Concat => labels.join(CONCAT_SEPARATOR),
                TieBreak::Strict => {
                    if labels.len() > 1 {
                        return Err(AppError::AmbiguousEventMatch {
                            date: date.to_string(),
                            first: labels[0].to_string(),
                            second: labels[1].to_string(),
                        });
                    }
                    labels[0].to_string()
                }
            };
            index.insert(date, label);
        }

        Ok(index)
    }

    /// Dates carrying more than one distinct label, with those labels.
    pub fn conflicts(events: &[DateEvent]) -> Vec<(NaiveDate, Vec<String>)> {
        group_labels(events)
            .into_iter()
            .filter(|(_, labels)| labels.len() > 1)
            .map(|(date, labels)| (date, labels.into_iter().map(str::to_string).collect()))
            .collect()
    }
}

/// Distinct labels per date, first-seen order.
fn group_labels(events: &[DateEvent]) -> BTreeMap<NaiveDate, Vec<&str>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();

    for ev in events {
        let labels = groups.entry(ev.date).or_default();
        if !labels.contains(&ev.label.as_str()) {
            labels.push(ev.label.as_str());
        }
    }

    groups
}
