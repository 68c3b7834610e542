//! Parse and render options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::table::Alignment;
use crate::utils::error::{TableError, TableResult};

/// Class seeded into every table's class list
pub const DEFAULT_TABLE_CLASS: &str = "tableau-table";

/// CSS class the HTML renderer adds to a cell for each alignment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlignmentClasses {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Default for AlignmentClasses {
    fn default() -> Self {
        Self {
            left: "a-l".to_string(),
            center: "a-c".to_string(),
            right: "a-r".to_string(),
        }
    }
}

impl AlignmentClasses {
    pub fn class_for(&self, alignment: Alignment) -> &str {
        match alignment {
            Alignment::Left => &self.left,
            Alignment::Center => &self.center,
            Alignment::Right => &self.right,
        }
    }
}

/// Options for parsing and rendering a table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// First entry of every table's class list
    /// Default: "tableau-table"
    pub table_class: String,

    /// Join a line ending in `\` with the line after it before classifying
    /// Default: true
    pub line_continuation: bool,

    /// Alignment classes used by the HTML renderer
    pub alignment_classes: AlignmentClasses,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            line_continuation: true,
            alignment_classes: AlignmentClasses::default(),
        }
    }
}

impl TableOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every physical line as its own row
    pub fn strict_lines() -> Self {
        Self {
            line_continuation: false,
            ..Self::default()
        }
    }

    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    pub fn with_line_continuation(mut self, enabled: bool) -> Self {
        self.line_continuation = enabled;
        self
    }

    pub fn with_alignment_classes(mut self, classes: AlignmentClasses) -> Self {
        self.alignment_classes = classes;
        self
    }

    /// The table class ends up in a `class` attribute, so it has to be a
    /// single non-empty token.
    pub fn validate(&self) -> TableResult<()> {
        if self.table_class.is_empty() {
            return Err(TableError::invalid("table class must not be empty"));
        }
        if self.table_class.chars().any(|c| c.is_whitespace() || c == '"') {
            return Err(TableError::invalid(format!(
                "table class {:?} must be a single class name",
                self.table_class
            )));
        }
        Ok(())
    }
}
