//! Table types.

use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell texts laid out on the table grid.
    ///
    /// A cell spanning `n` grid columns appears `n` times in its row, and a
    /// cell that continues a vertical merge repeats the text of the cell
    /// above it in the same grid column.
    pub fn grid_texts(&self) -> Vec<Vec<String>> {
        let mut grid: Vec<Vec<String>> = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut texts = Vec::with_capacity(row.cells.len());
            for cell in &row.cells {
                let own = cell.text();
                for _ in 0..cell.grid_span.max(1) {
                    let text = match (cell.vertical_merge, grid.last()) {
                        (Some(VerticalMerge::Continue), Some(above)) => {
                            above.get(texts.len()).cloned().unwrap_or_default()
                        }
                        _ => own.clone(),
                    };
                    texts.push(text);
                }
            }
            grid.push(texts);
        }

        grid
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::with_text).collect())
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Text of each paragraph directly inside the cell
    pub paragraphs: Vec<String>,

    /// Number of grid columns this cell spans
    pub grid_span: u32,

    /// Vertical merge state, if the cell takes part in one
    pub vertical_merge: Option<VerticalMerge>,
}

impl TableCell {
    /// Create a cell holding one paragraph of text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_paragraphs(vec![text.into()])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::with_paragraphs(Vec::new())
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_paragraphs(paragraphs: Vec<String>) -> Self {
        Self {
            paragraphs,
            grid_span: 1,
            vertical_merge: None,
        }
    }

    /// Set the grid span and return self.
    pub fn span(mut self, columns: u32) -> Self {
        self.grid_span = columns;
        self
    }

    /// Set the vertical merge state and return self.
    pub fn merge(mut self, merge: VerticalMerge) -> Self {
        self.vertical_merge = Some(merge);
        self
    }

    /// Cell text: its paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

/// Vertical merge state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// First cell of a vertically merged range
    Restart,
    /// Cell covered by the merge started above
    Continue,
}
