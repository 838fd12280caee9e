use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{MeetingDay, WeekdayTag};
use crate::ui::messages::info;
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// Generates Tuesday/Thursday class meetings between two dates.
pub struct MeetingDayGenerator;

impl MeetingDayGenerator {
    /// Every Tuesday and Thursday in `start..=end`, ascending.
    ///
    /// Returns an empty list when `start > end`.
    pub fn generate(start: NaiveDate, end: NaiveDate) -> Vec<MeetingDay> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter_map(|date| {
                WeekdayTag::from_weekday(date.weekday())
                    .map(|weekday_tag| MeetingDay { date, weekday_tag })
            })
            .collect()
    }
}

pub struct MeetingsOptions {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub force: bool,
}

/// `meetings` command: list class days for the term.
pub struct MeetingsLogic;

impl MeetingsLogic {
    pub fn run(opts: &MeetingsOptions) -> AppResult<()> {
        let meetings = MeetingDayGenerator::generate(opts.start, opts.end);

        info(format!(
            "{} meeting days between {} and {}",
            meetings.len(),
            opts.start,
            opts.end
        ));

        ExportLogic::write(
            "Meetings",
            &meetings,
            opts.format,
            opts.output.as_deref(),
            opts.force,
        )
    }
}
