use crate::core::parser::{DateRangeParser, ErrorMode, ParsedCalendar, parse_calendar};
use crate::core::source::load_rows;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::{info, warning};
use std::path::{Path, PathBuf};

pub struct CalendarOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub year: i32,
    pub has_headers: bool,
    pub error_mode: ErrorMode,
    pub force: bool,
}

/// `calendar` command: flatten the registrar calendar into one row per day.
pub struct CalendarLogic;

impl CalendarLogic {
    pub fn run(opts: &CalendarOptions) -> AppResult<()> {
        let parsed = Self::load(&opts.input, opts.year, opts.has_headers, opts.error_mode)?;

        ExportLogic::write(
            "Calendar",
            &parsed.events,
            opts.format,
            opts.output.as_deref(),
            opts.force,
        )
    }

    /// Load and parse the calendar file once; shared with the schedule command.
    pub fn load(
        input: &Path,
        year: i32,
        has_headers: bool,
        mode: ErrorMode,
    ) -> AppResult<ParsedCalendar> {
        let rows = load_rows(input, has_headers)?;
        info(format!(
            "Read {} calendar rows from {}",
            rows.len(),
            input.display()
        ));

        let parser = DateRangeParser::new(year);
        let parsed = parse_calendar(&rows, &parser, mode)?;

        info(format!(
            "Parsed {} event days (reference year {})",
            parsed.events.len(),
            parser.year()
        ));
        if !parsed.skipped.is_empty() {
            warning(format!("{} rows skipped", parsed.skipped.len()));
        }

        Ok(parsed)
    }
}
