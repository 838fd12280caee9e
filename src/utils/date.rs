use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date as used on the command line and in config.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("'{s}' (expected YYYY-MM-DD)")))
}
