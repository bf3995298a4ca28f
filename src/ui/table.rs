//! Borderless table rendering for formatted output.

use console::{measure_text_width, pad_str, Alignment};

/// A borderless table with fixed column widths.
///
/// Every cell is padded with one space on each side. Cells wider than their
/// column wrap onto extra lines; the other cells of that row are padded
/// with blanks. No rules are drawn between rows.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given column widths.
    pub fn new(column_widths: Vec<usize>) -> Self {
        Self {
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table as a string. Each output line ends with `\n`.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&self.render_row(row));
        }
        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<Vec<String>> = self
            .column_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| wrap_cell(row.get(i).map(String::as_str).unwrap_or(""), width))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        let mut s = String::new();
        for line in 0..height {
            for (cell, &width) in cells.iter().zip(&self.column_widths) {
                let text = cell.get(line).map(String::as_str).unwrap_or("");
                s.push(' ');
                s.push_str(&pad_str(text, width, Alignment::Left, None));
                s.push(' ');
            }
            s.push('\n');
        }
        s
    }
}

/// Break an over-wide cell into chunks of at most `width` columns.
///
/// Breaks ignore word boundaries. Whitespace around the remainder is
/// trimmed after every break.
fn wrap_cell(cell: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut rest = cell;
    loop {
        let split = split_at_width(rest, width);
        chunks.push(rest[..split].to_string());
        rest = rest[split..].trim();
        if measure_text_width(rest) == 0 {
            return chunks;
        }
    }
}

/// Byte offset where `text` stops fitting in `width` columns.
///
/// Always takes at least one character.
fn split_at_width(text: &str, width: usize) -> usize {
    let mut used = 0;
    let mut buf = [0; 4];
    for (index, ch) in text.char_indices() {
        let ch_width = measure_text_width(ch.encode_utf8(&mut buf));
        if index > 0 && used + ch_width > width {
            return index;
        }
        used += ch_width;
    }
    text.len()
}
