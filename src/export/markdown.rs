//! Markdown pipe-table rendering.

use crate::export::TableRecord;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct MarkdownTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                // markdown needs at least three dashes per column
                width: h.width().max(3),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_records<T: TableRecord>(records: &[T]) -> Self {
        let mut table = Self::new(&T::headers());
        for r in records {
            table.add_row(r.cells());
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        let row: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();

        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }

        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.render_line(&headers));

        // Separator
        out.push('|');
        for col in &self.columns {
            out.push_str(&format!(" {} |", "-".repeat(col.width)));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.render_line(&cells));
        }

        out
    }

    fn render_line(&self, cells: &[&str]) -> String {
        let mut line = String::from("|");
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or_default();
            line.push(' ');
            line.push_str(&pad_right(cell, col.width));
            line.push_str(" |");
        }
        line.push('\n');
        line
    }
}

/// Pad by display width, not by char count.
fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
