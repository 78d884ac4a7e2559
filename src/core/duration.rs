//! Duration formatting and break classification.
//!
//! Thresholds are compared on whole minutes (floor of the elapsed time) and
//! are exclusive: exactly 30 minutes is normal, exactly 32 is still a warning.

use crate::models::BreakStatus;

/// Minutes above which a break enters the warning band.
pub const WARNING_MINUTES: i64 = 30;
/// Minutes above which a break is overtime.
pub const OVERTIME_MINUTES: i64 = 32;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Render milliseconds as `"{m}m {s}s"`, or `"{h}h {m}m {s}s"` from one hour up.
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

pub fn duration_minutes(ms: i64) -> i64 {
    ms.max(0) / MS_PER_MINUTE
}

/// Three-tier classification shared by status and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakClass {
    Normal,
    Warning,
    Critical,
}

pub fn classify_minutes(minutes: i64) -> BreakClass {
    if minutes > OVERTIME_MINUTES {
        BreakClass::Critical
    } else if minutes > WARNING_MINUTES {
        BreakClass::Warning
    } else {
        BreakClass::Normal
    }
}

/// Visual band of a row. Active breaks use the light palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    ActiveNormal,
    ActiveWarning,
    ActiveCritical,
    CompletedNormal,
    CompletedWarning,
    CompletedCritical,
}

pub fn classify_color(duration_ms: i64, status: BreakStatus) -> ColorBand {
    let class = classify_minutes(duration_minutes(duration_ms));

    match (status.is_active(), class) {
        (true, BreakClass::Normal) => ColorBand::ActiveNormal,
        (true, BreakClass::Warning) => ColorBand::ActiveWarning,
        (true, BreakClass::Critical) => ColorBand::ActiveCritical,
        (false, BreakClass::Normal) => ColorBand::CompletedNormal,
        (false, BreakClass::Warning) => ColorBand::CompletedWarning,
        (false, BreakClass::Critical) => ColorBand::CompletedCritical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mins(m: i64) -> i64 {
        m * MS_PER_MINUTE
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(29 * MS_PER_MINUTE), "29m 0s");
        assert_eq!(format_duration(61_999), "1m 1s");
    }

    #[test]
    fn formats_hours_when_at_least_one_hour() {
        assert_eq!(format_duration(3_661_000), "1h 1m 1s");
        assert_eq!(format_duration(MS_PER_HOUR), "1h 0m 0s");
        assert_eq!(format_duration(MS_PER_HOUR - 1), "59m 59s");
    }

    #[test]
    fn negative_durations_render_as_zero() {
        assert_eq!(format_duration(-5_000), "0m 0s");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify_minutes(30), BreakClass::Normal);
        assert_eq!(classify_minutes(31), BreakClass::Warning);
        assert_eq!(classify_minutes(32), BreakClass::Warning);
        assert_eq!(classify_minutes(33), BreakClass::Critical);
    }

    #[test]
    fn partial_minutes_are_floored() {
        // 30m 59s is still 30 whole minutes
        assert_eq!(duration_minutes(mins(30) + 59_000), 30);
        assert_eq!(
            classify_color(mins(30) + 59_000, BreakStatus::Completed),
            ColorBand::CompletedNormal
        );
    }

    #[test]
    fn active_and_completed_use_distinct_palettes() {
        assert_eq!(
            classify_color(mins(10), BreakStatus::Active),
            ColorBand::ActiveNormal
        );
        assert_eq!(
            classify_color(mins(31), BreakStatus::Active),
            ColorBand::ActiveWarning
        );
        assert_eq!(
            classify_color(mins(40), BreakStatus::Active),
            ColorBand::ActiveCritical
        );
        assert_eq!(
            classify_color(mins(31), BreakStatus::Completed),
            ColorBand::CompletedWarning
        );
        assert_eq!(
            classify_color(mins(40), BreakStatus::Overtime),
            ColorBand::CompletedCritical
        );
    }
}
