//! Column width accounting for the warning table.

use console::measure_text_width;

/// Space reserved for cell padding around the four columns.
pub const TABLE_MARGIN: usize = 8;

/// Terminals narrower than this are treated as this wide.
pub const MIN_TTY_WIDTH: usize = 80;

/// Width used for the text column when nothing else fits.
pub const MIN_TEXT_WIDTH: usize = 20;

/// Index of the free-text column.
pub const TEXT_COLUMN: usize = 2;

/// Running maximum display width of each table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths(pub [usize; 4]);

impl Default for ColumnWidths {
    fn default() -> Self {
        Self([1; 4])
    }
}

impl ColumnWidths {
    /// Widen columns to fit a row. Widths ignore ANSI styling.
    pub fn update(&mut self, row: &[String; 4]) {
        for (width, cell) in self.0.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    /// Sum of all column widths.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Width for the free-text column.
    ///
    /// `tty_columns` is the terminal width, or `None` when output is not an
    /// interactive terminal, in which case the text column keeps its
    /// natural width.
    pub fn text_width(&self, tty_columns: Option<usize>) -> usize {
        let natural = self.0[TEXT_COLUMN];
        let Some(columns) = tty_columns else {
            return natural;
        };

        let tty_width = columns.max(MIN_TTY_WIDTH);
        let total = self.total();

        if tty_width > total + TABLE_MARGIN {
            return natural;
        }

        let others = total - natural + TABLE_MARGIN;
        match tty_width.checked_sub(others) {
            Some(available) if available > 0 => available,
            _ => MIN_TEXT_WIDTH,
        }
    }

    /// Final widths for rendering, with the text column resolved.
    pub fn resolved(&self, tty_columns: Option<usize>) -> [usize; 4] {
        let mut widths = self.0;
        widths[TEXT_COLUMN] = self.text_width(tty_columns);
        widths
    }
}
