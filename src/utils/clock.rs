//! Wall-clock capability injected into the trackers.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Timestamp layout used for every `*_date` / `created_at` column holding a time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of "now" and "today" for default values.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current instant rendered as `YYYY-MM-DD HH:MM:SS`.
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Build from a `YYYY-MM-DD HH:MM:SS` string.
    pub fn at(ts: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
            .ok()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
