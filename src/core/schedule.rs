use crate::core::calendar::CalendarLogic;
use crate::core::meetings::MeetingDayGenerator;
use crate::core::merge::{CONCAT_SEPARATOR, ScheduleMerger, TieBreak};
use crate::core::parser::ErrorMode;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct ScheduleOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub year: i32,
    pub tie_break: TieBreak,
    pub has_headers: bool,
    pub error_mode: ErrorMode,
    pub force: bool,
}

/// `schedule` command: class meetings annotated with academic events.
pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn run(opts: &ScheduleOptions) -> AppResult<()> {
        let parsed =
            CalendarLogic::load(&opts.input, opts.year, opts.has_headers, opts.error_mode)?;

        if opts.tie_break != TieBreak::Strict {
            for (date, labels) in ScheduleMerger::conflicts(&parsed.events) {
                warning(format!(
                    "{} events on {}: {} (tie-break: {})",
                    labels.len(),
                    date,
                    labels.join(CONCAT_SEPARATOR),
                    opts.tie_break.as_str()
                ));
            }
        }

        let meetings = MeetingDayGenerator::generate(opts.start, opts.end);
        let rows = ScheduleMerger::new(opts.tie_break).merge(&meetings, &parsed.events)?;

        info(format!(
            "{} class meetings, {} on academic calendar dates",
            rows.len(),
            rows.iter().filter(|r| r.has_event()).count()
        ));

        ExportLogic::write(
            "Schedule",
            &rows,
            opts.format,
            opts.output.as_deref(),
            opts.force,
        )
    }
}
