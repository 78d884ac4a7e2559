// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{BreakExport, HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[BreakExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same columns as the spreadsheet.
pub(crate) fn export_csv(rows: &[BreakExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for item in rows {
        wtr.write_record(item.to_row())
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
