//! Tracker logic: one log per record type, each over an injected store and clock.

pub mod bible;
pub mod log;
pub mod rosary;
pub mod sins;

pub use bible::BibleLog;
pub use rosary::RosaryLog;
pub use sins::{SinFilter, SinLog};

use crate::errors::{AppError, AppResult};

/// Bound value for `LIMIT ?`: SQLite treats a negative limit as "no limit".
pub(crate) fn limit_param(limit: Option<usize>) -> i64 {
    match limit {
        Some(n) => i64::try_from(n).unwrap_or(i64::MAX),
        None => -1,
    }
}

/// Reject blank mandatory text before anything is written.
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
