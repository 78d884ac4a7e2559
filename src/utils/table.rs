//! Table rendering utilities for CLI outputs.

use crate::utils::colors::paint;
use crate::utils::formatting::{pad_right, separator};
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// ANSI color applied to the whole row, by row index.
    pub styles: Vec<&'static str>,
    pub separator_char: String,
}

impl Table {
    pub fn new(headers: &[&str], separator_char: &str) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            styles: Vec::new(),
            separator_char: separator_char.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>, style: &'static str) {
        self.rows.push(row);
        self.styles.push(style);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(h, *w))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');
        out.push_str(&separator(&self.separator_char, total));
        out.push('\n');

        // Rows
        for (row, style) in self.rows.iter().zip(&self.styles) {
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            out.push_str(&paint(style, line.join(" | ").trim_end()));
            out.push('\n');
        }

        out
    }
}
