// src/export/clipboard.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{BreakExport, HEADERS};
use arboard::Clipboard;

/// Tab-separated table: one header row, then one row per record.
pub fn build_tsv(rows: &[BreakExport]) -> String {
    let mut out = HEADERS.join("\t");
    out.push('\n');

    for item in rows {
        let cells: Vec<String> = item.to_row().iter().map(|c| sanitize(c)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

/// Tabs and newlines inside a cell would break the row layout.
fn sanitize(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}

/// Write `text` to the system clipboard. Failures are reported, not retried.
pub fn copy_text(text: &str) -> AppResult<()> {
    let mut clipboard = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}
