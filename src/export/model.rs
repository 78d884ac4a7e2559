// src/export/model.rs

use crate::core::duration::format_duration;
use crate::core::tracker::TrackerState;
use crate::models::BreakRecord;
use crate::utils::time::format_stamp;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Column order shared by the clipboard, CSV and XLSX outputs.
pub const HEADERS: [&str; 6] = [
    "Associate Name",
    "Break Start",
    "Break End",
    "Break Duration",
    "Reason",
    "Status",
];

/// Flat view of a break record for export.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakExport {
    pub id: String,
    pub associate_name: String,
    pub break_start: String,
    pub break_end: String,
    pub break_duration: String,
    pub reason: String,
    pub status: String,
}

impl BreakExport {
    /// Open breaks get their duration computed at `now`.
    pub fn from_record(r: &BreakRecord, now: DateTime<Local>) -> Self {
        Self {
            id: r.id.clone(),
            associate_name: r.name.clone(),
            break_start: format_stamp(r.start_time),
            break_end: r.end_time.map(format_stamp).unwrap_or_default(),
            break_duration: format_duration(r.duration_ms(now)),
            reason: r.reason.clone(),
            status: r.status.to_string(),
        }
    }

    /// Cells in [`HEADERS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.associate_name.clone(),
            self.break_start.clone(),
            self.break_end.clone(),
            self.break_duration.clone(),
            self.reason.clone(),
            self.status.clone(),
        ]
    }
}

pub fn build_rows(state: &TrackerState, now: DateTime<Local>) -> Vec<BreakExport> {
    state
        .records()
        .iter()
        .map(|r| BreakExport::from_record(r, now))
        .collect()
}
