// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Excel number format used for break timestamps.
pub(crate) const STAMP_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Interpret an export timestamp (`YYYY-MM-DD HH:MM:SS`) as an Excel serial.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<f64> {
    NaiveDateTime::parse_from_str(s, crate::utils::time::STAMP_FORMAT)
        .ok()
        .and_then(|dt| naive_datetime_to_excel_serial(&dt))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_counts_days_from_excel_epoch() {
        // 1900-01-01 is serial 2 with the 1899-12-30 epoch
        assert_eq!(parse_to_excel_serial("1900-01-01 00:00:00"), Some(2.0));
        let noon = parse_to_excel_serial("1900-01-01 12:00:00").unwrap();
        assert!((noon - 2.5).abs() < 1e-9);
        assert_eq!(parse_to_excel_serial(""), None);
    }
}
