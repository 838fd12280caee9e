//! Registrar date-range parsing.
//!
//! Three textual shapes are understood:
//! - cross-month ranges:   `October 23 - November 3`
//! - multi-range in month: `December 9-10, 16-17`
//! - single day or range:  `August 16`, `August 25-29`
//!
//! Every shape expands into the inclusive list of days, one [`DateEvent`]
//! per day, all carrying the row label. A span that ends before it starts
//! contributes no days.

use crate::errors::{AppError, AppResult};
use crate::models::{CalendarRow, DateEvent};
use crate::ui::messages::warning;
use chrono::{Month, NaiveDate};

/// Parses registrar date strings against a fixed reference year.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeParser {
    year: i32,
}

impl DateRangeParser {
    pub fn new(reference_year: i32) -> Self {
        Self {
            year: reference_year,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Expand `date_str` into one event per day, labelled with `label`.
    pub fn parse(&self, date_str: &str, label: &str) -> AppResult<Vec<DateEvent>> {
        // Registrar pages mix ASCII hyphens with en/em dashes.
        let input = date_str.trim().replace(['\u{2013}', '\u{2014}'], "-");
        let tokens: Vec<&str> = input.split_whitespace().collect();

        if tokens.is_empty() {
            return Err(AppError::malformed(date_str, "empty date string"));
        }

        let spans = if input.contains('-') && !input.contains(',') && tokens.len() > 3 {
            vec![self.cross_month(date_str, &tokens)?]
        } else if input.contains(',') {
            self.multi_range(date_str, &input)?
        } else {
            vec![self.single_month(date_str, &tokens)?]
        };

        let mut events = Vec::new();
        for (start, end) in spans {
            if end < start {
                warning(format!(
                    "'{}' ends ({end}) before it starts ({start}); no dates for '{label}'",
                    date_str.trim()
                ));
                continue;
            }
            events.extend(
                start
                    .iter_days()
                    .take_while(|d| *d <= end)
                    .map(|d| DateEvent::new(d, label)),
            );
        }

        Ok(events)
    }

    /// `<MonthA> <DayA> - <MonthB> <DayB>`
    fn cross_month(&self, raw: &str, tokens: &[&str]) -> AppResult<(NaiveDate, NaiveDate)> {
        let [month_start, day_start, sep, month_end, day_end] = tokens else {
            return Err(AppError::malformed(
                raw,
                format!(
                    "expected '<Month> <Day> - <Month> <Day>', got {} tokens",
                    tokens.len()
                ),
            ));
        };

        if *sep != "-" {
            return Err(AppError::malformed(
                raw,
                format!("expected '-' separator, got '{sep}'"),
            ));
        }

        let start = self.date(raw, month_start, parse_day(raw, day_start)?)?;
        let end = self.date(raw, month_end, parse_day(raw, day_end)?)?;
        Ok((start, end))
    }

    /// `<Month> <D1>-<D2>, <D3>-<D4>, ...`
    fn multi_range(&self, raw: &str, input: &str) -> AppResult<Vec<(NaiveDate, NaiveDate)>> {
        let (month, rest) = input
            .split_once(' ')
            .ok_or_else(|| AppError::malformed(raw, "missing day list after month"))?;

        rest.split(',')
            .map(|part| -> AppResult<(NaiveDate, NaiveDate)> {
                let (d1, d2) = parse_day_span(raw, part)?;
                Ok((self.date(raw, month, d1)?, self.date(raw, month, d2)?))
            })
            .collect()
    }

    /// `<Month> <Day>` or `<Month> <D1>-<D2>`
    fn single_month(&self, raw: &str, tokens: &[&str]) -> AppResult<(NaiveDate, NaiveDate)> {
        let [month, days] = tokens else {
            return Err(AppError::malformed(
                raw,
                format!(
                    "expected '<Month> <Day>' or '<Month> <D1>-<D2>', got {} tokens",
                    tokens.len()
                ),
            ));
        };

        let (d1, d2) = parse_day_span(raw, days)?;
        Ok((self.date(raw, month, d1)?, self.date(raw, month, d2)?))
    }

    fn date(&self, raw: &str, month: &str, day: u32) -> AppResult<NaiveDate> {
        let month_number = full_month(month)
            .ok_or_else(|| AppError::malformed(raw, format!("unknown month '{month}'")))?;

        NaiveDate::from_ymd_opt(self.year, month_number, day).ok_or_else(|| {
            AppError::malformed(
                raw,
                format!("'{month} {day}' is not a valid date in {}", self.year),
            )
        })
    }
}

/// Month number for a full English month name, any case. Abbreviations are rejected.
fn full_month(name: &str) -> Option<u32> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|m| m.name().eq_ignore_ascii_case(name))
        .map(|m| m.number_from_month())
}

fn parse_day(raw: &str, token: &str) -> AppResult<u32> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::malformed(raw, format!("non-numeric day '{}'", token.trim())))
}

/// `D1-D2` or a bare `D` (start = end).
fn parse_day_span(raw: &str, part: &str) -> AppResult<(u32, u32)> {
    let part = part.trim();
    if part.is_empty() {
        return Err(AppError::malformed(raw, "empty day range"));
    }

    match part.split_once('-') {
        Some((a, b)) => Ok((parse_day(raw, a)?, parse_day(raw, b)?)),
        None => {
            let d = parse_day(raw, part)?;
            Ok((d, d))
        }
    }
}

/// What to do when a calendar row cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the whole run on the first bad row.
    #[default]
    FailFast,
    /// Warn, remember the error and keep going.
    SkipInvalid,
}

impl ErrorMode {
    pub fn from_flag(skip_invalid: bool) -> Self {
        if skip_invalid {
            ErrorMode::SkipInvalid
        } else {
            ErrorMode::FailFast
        }
    }
}

/// Flat result of parsing a whole calendar.
#[derive(Debug, Default)]
pub struct ParsedCalendar {
    pub events: Vec<DateEvent>,
    pub skipped: Vec<AppError>,
}

/// Parse every row once, in input order.
pub fn parse_calendar(
    rows: &[CalendarRow],
    parser: &DateRangeParser,
    mode: ErrorMode,
) -> AppResult<ParsedCalendar> {
    let mut parsed = ParsedCalendar::default();

    for row in rows {
        match parser.parse(&row.date_str, &row.label) {
            Ok(events) => parsed.events.extend(events),
            Err(e) if mode == ErrorMode::SkipInvalid => {
                warning(format!("Skipping row '{}': {}", row.label, e));
                parsed.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(parsed)
}
