//! Console table printing

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use eda_core::Tabular;

/// Trait for rendering `Tabular` values as text
pub trait TablePrinter {
    /// Render a table to a string
    fn render(&self, table: &dyn Tabular) -> String;

    /// Write a table to standard output
    fn print_table(&self, table: &dyn Tabular) {
        println!("{}", self.render(table));
    }
}

/// Box-drawn console tables sized to a fixed width
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTablePrinter {
    width: u16,
}

impl ConsoleTablePrinter {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

impl Default for ConsoleTablePrinter {
    fn default() -> Self {
        Self::new(80)
    }
}

impl TablePrinter for ConsoleTablePrinter {
    fn render(&self, table: &dyn Tabular) -> String {
        let mut out = Table::new();
        out.load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(self.width)
            .set_header(table.headers());

        for row in table.rows() {
            out.add_row(row);
        }
        // Leading index column left, values right
        for (i, column) in out.column_iter_mut().enumerate() {
            if i > 0 {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        out.to_string()
    }
}
