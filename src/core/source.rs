//! Reading registrar calendar rows from a local CSV file.

use crate::errors::{AppError, AppResult};
use crate::models::CalendarRow;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<body>.*?)\s*,\s*\d{4}\s*$").expect("valid regex"));

/// Drop a trailing `, YYYY` from a registrar date string.
///
/// `"November 20, 2024"` becomes `"November 20"`; `"December 9-10, 16-17"`
/// is left alone.
pub fn strip_year_suffix(date_str: &str) -> String {
    let trimmed = date_str.trim();
    match YEAR_SUFFIX.captures(trimmed) {
        Some(caps) => caps["body"].to_string(),
        None => trimmed.to_string(),
    }
}

/// Load `(date, event)` rows. Only the first two columns are used.
pub fn load_rows(path: &Path, has_headers: bool) -> AppResult<Vec<CalendarRow>> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("calendar file not found: {}", path.display()),
        )));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;

        let date_str = record.get(0).unwrap_or_default();
        if date_str.is_empty() {
            continue;
        }

        let label = record.get(1).ok_or_else(|| {
            AppError::Other(format!(
                "{}: record {} has no event column",
                path.display(),
                i + 1
            ))
        })?;

        rows.push(CalendarRow::new(&strip_year_suffix(date_str), label));
    }

    Ok(rows)
}
