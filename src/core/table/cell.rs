//! Cells and rows of the built table

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::format::{Format, Modifier};
use super::parser::ParsedCell;

/// A single cell in the table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The cell text, trimmed. Still in the host's markup.
    pub content: String,
    /// Fully merged format: column default, row propagation, own annotations
    pub format: Format,
    /// Number of `^` cells directly below that this cell absorbs
    pub rowspan_count: usize,
    /// Number of `{` cells directly to the right that this cell absorbs
    pub colspan_count: usize,
    /// Absorbed by a span; the renderer emits nothing for it
    pub hidden: bool,
}

impl Cell {
    pub fn new(content: impl Into<String>, format: Format) -> Self {
        Cell {
            content: content.into(),
            format,
            rowspan_count: 0,
            colspan_count: 0,
            hidden: false,
        }
    }

    /// Build a cell from its parsed form.
    ///
    /// Returns the cell and the modifiers it hands on to the columns to its
    /// right.
    pub fn from_parsed(
        raw: &ParsedCell,
        base: &Format,
        inherited: &[Modifier],
    ) -> (Self, Vec<Modifier>) {
        let merged = base.merge(inherited, &raw.annotations);
        (Cell::new(raw.text(), merged.format), merged.propagate)
    }

    pub fn is_heading(&self) -> bool {
        self.format.heading
    }
}

/// A content row of the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cell_at(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell is either hidden or a heading
    pub fn looks_like_header(&self) -> bool {
        self.cells.iter().all(|cell| cell.hidden || cell.format.heading)
    }

    /// Cells the renderer should emit
    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.hidden)
    }
}
