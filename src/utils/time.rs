//! Time utilities: display formats for break timestamps.

use chrono::{DateTime, Local};

/// Wall-clock form used in tables and notices, e.g. `10:00:00 AM`.
pub const CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// Full timestamp form used by exports.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_clock(dt: DateTime<Local>) -> String {
    dt.format(CLOCK_FORMAT).to_string()
}

pub fn format_stamp(dt: DateTime<Local>) -> String {
    dt.format(STAMP_FORMAT).to_string()
}

pub fn format_optional_clock(dt: Option<DateTime<Local>>) -> String {
    dt.map(format_clock).unwrap_or_else(|| "--:--".to_string())
}

/// ISO date of `dt`, used in export file names.
pub fn iso_date(dt: DateTime<Local>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_is_twelve_hour_with_seconds() {
        let dt = Local.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap();
        assert_eq!(format_clock(dt), "10:00:00 AM");

        let pm = Local.with_ymd_and_hms(2026, 10, 17, 15, 4, 5).unwrap();
        assert_eq!(format_clock(pm), "3:04:05 PM");
        assert_eq!(format_stamp(pm), "2026-10-17 15:04:05");
    }
}
