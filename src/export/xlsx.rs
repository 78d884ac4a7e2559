// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{STAMP_NUM_FORMAT, parse_to_excel_serial};
use crate::export::model::{BreakExport, HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Break Times";

const COL_START: usize = 1;
const COL_END: usize = 2;
const COL_STATUS: usize = 5;

/// Build the "Break Times" workbook with styled header and banded rows.
pub(crate) fn build_workbook(rows: &[BreakExport]) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in item.to_row().iter().enumerate() {
            write_cell(worksheet, row, col, value, band_color, &item.status)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(workbook)
}

/// Export XLSX with styling and auto-sized columns.
pub(crate) fn export_xlsx(rows: &[BreakExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = build_workbook(rows)?;
    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell: timestamps become Excel dates, everything else stays text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
    status: &str,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if (col == COL_START || col == COL_END)
        && let Some(serial) = parse_to_excel_serial(s)
    {
        let fmt = base.set_num_format(STAMP_NUM_FORMAT);
        worksheet
            .write_with_format(row, col as u16, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    let fmt = if col == COL_STATUS && status == "overtime" {
        base.set_bold().set_font_color(Color::RGB(0xC00000))
    } else {
        base
    };

    worksheet
        .write_with_format(row, col as u16, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_builds_for_empty_and_filled_sets() {
        assert!(build_workbook(&[]).is_ok());

        let row = BreakExport {
            id: "1".into(),
            associate_name: "Alice".into(),
            break_start: "2026-10-17 10:00:00".into(),
            break_end: String::new(),
            break_duration: "5m 0s".into(),
            reason: "42".into(),
            status: "active".into(),
        };
        let mut wb = build_workbook(&[row]).unwrap();
        let bytes = wb.save_to_buffer().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn workbook_has_single_break_times_sheet() {
        use std::io::{Cursor, Read};

        let mut wb = build_workbook(&[]).unwrap();
        let bytes = wb.save_to_buffer().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();

        assert_eq!(xml.matches("<sheet ").count(), 1);
        assert!(xml.contains(&format!(r#"name="{SHEET_NAME}""#)));
    }
}
