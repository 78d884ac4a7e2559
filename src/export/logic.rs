// src/export/logic.rs

use crate::core::tracker::TrackerState;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::clipboard::{build_tsv, copy_text};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::utils::time::iso_date;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Default file name, e.g. `break_times_2026-10-17.xlsx`.
    pub fn default_file_name(format: &ExportFormat, now: DateTime<Local>) -> String {
        format!("break_times_{}.{}", iso_date(now), format.as_str())
    }

    /// Resolve the output path: explicit `file`, or the default name in `export_dir`.
    pub fn resolve_path(
        format: &ExportFormat,
        file: Option<&str>,
        export_dir: &str,
        now: DateTime<Local>,
    ) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => expand_tilde(export_dir).join(Self::default_file_name(format, now)),
        }
    }

    /// Write every record to `path` in `format`; open breaks are timed at `now`.
    pub fn export(
        state: &TrackerState,
        now: DateTime<Local>,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if state.is_empty() {
            warning("No break records to export: writing headers only.");
        }

        let rows = build_rows(state, now);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }

    pub fn table_tsv(state: &TrackerState, now: DateTime<Local>) -> String {
        build_tsv(&build_rows(state, now))
    }

    /// Copy the whole table to the clipboard as TSV; returns the row count.
    pub fn copy_table(state: &TrackerState, now: DateTime<Local>) -> AppResult<usize> {
        copy_text(&Self::table_tsv(state, now))?;
        Ok(state.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_name_carries_the_date() {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 18, 0, 0).unwrap();
        assert_eq!(
            ExportLogic::default_file_name(&ExportFormat::Xlsx, now),
            "break_times_2026-10-17.xlsx"
        );

        let p = ExportLogic::resolve_path(&ExportFormat::Csv, None, "out", now);
        assert_eq!(p, PathBuf::from("out").join("break_times_2026-10-17.csv"));
    }
}
