//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Pad to the column width using display width, not byte length,
    /// so currency symbols and names render aligned.
    fn pad_cell(value: &str, width: usize) -> String {
        let visible = UnicodeWidthStr::width(value);
        let padding = width.saturating_sub(visible);
        format!("{}{} ", value, " ".repeat(padding))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad_cell(&col.header, col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::pad_cell(cell, col.width));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_col() -> Table {
        Table::new(vec![
            Column {
                header: "ID".into(),
                width: 4,
            },
            Column {
                header: "TITLE".into(),
                width: 12,
            },
        ])
    }

    #[test]
    fn renders_header_and_rows() {
        let mut t = two_col();
        t.add_row(vec!["1".into(), "Fix sink".into()]);
        let out = t.render();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("ID"));
        assert!(lines.next().unwrap().contains("Fix sink"));
    }

    #[test]
    fn wide_glyphs_do_not_break_alignment() {
        let mut t = two_col();
        t.add_row(vec!["1".into(), "₱500".into()]);
        t.add_row(vec!["2".into(), "P500".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        // Both data lines must render to the same display width.
        assert_eq!(
            UnicodeWidthStr::width(lines[1]),
            UnicodeWidthStr::width(lines[2])
        );
    }
}
