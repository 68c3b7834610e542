//! Error handling for table parsing
//!
//! A block either becomes a table or it does not. [`TableError`] says why it
//! did not; the detailed account is whatever was reported to the diagnostic
//! sink along the way.

use std::fmt;

/// Why a block was rejected as a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotATableReason {
    /// The block contained no rows
    EmptyTable,
    /// A line matched none of the row kinds
    UnclassifiableRow,
}

impl fmt::Display for NotATableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotATableReason::EmptyTable => write!(f, "table has no rows"),
            NotATableReason::UnclassifiableRow => write!(f, "can't decipher table row"),
        }
    }
}

/// Table parsing error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// The block is not a table
    NotATable {
        reason: NotATableReason,
        line: Option<usize>,
        source_text: Option<String>,
    },
    /// Invalid options or input outside the table grammar
    InvalidInput { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NotATable {
                reason,
                line,
                source_text,
            } => {
                write!(f, "Not a table: {}", reason)?;
                if let Some(l) = line {
                    write!(f, " at line {}", l)?;
                }
                if let Some(src) = source_text {
                    write!(f, ": {}", src)?;
                }
                Ok(())
            }
            TableError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn empty_table() -> Self {
        TableError::NotATable {
            reason: NotATableReason::EmptyTable,
            line: None,
            source_text: None,
        }
    }

    pub fn unclassifiable_row(line: usize, source_text: impl Into<String>) -> Self {
        TableError::NotATable {
            reason: NotATableReason::UnclassifiableRow,
            line: Some(line),
            source_text: Some(source_text.into()),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidInput {
            message: message.into(),
        }
    }

    /// True when the block was rejected by the table grammar
    pub fn is_not_a_table(&self) -> bool {
        matches!(self, TableError::NotATable { .. })
    }
}
