use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Strict `YYYY-MM-DD`: the input must parse and re-format to itself,
/// so `2023-1-5` or `2023-01-05 ` are rejected.
pub fn parse_strict(s: &str) -> AppResult<NaiveDate> {
    match parse_date(s) {
        Some(d) if d.format(DATE_FORMAT).to_string() == s => Ok(d),
        _ => Err(AppError::InvalidDate(s.to_string())),
    }
}

/// Validate an optional user-supplied date, returning the canonical string.
pub fn validate_optional(input: Option<&str>) -> AppResult<Option<String>> {
    input
        .map(|s| parse_strict(s).map(|d| d.format(DATE_FORMAT).to_string()))
        .transpose()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}
