//! Time source for the tracker.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant (used by `--at` and by tests).
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Parse an RFC 3339 timestamp or a local `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in formats.iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive
                .and_local_timezone(Local)
                .earliest()
                .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()));
        }
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// Build the clock for this run: pinned when `at` is given, wall clock otherwise.
pub fn from_option(at: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(s) => Ok(Box::new(FixedClock(parse_instant(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
