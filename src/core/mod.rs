//! Core parsing modules
//!
//! - `table`: row classification, table model and span resolution
//! - `options`: parse and render options

pub mod options;
pub mod table;

pub use options::{AlignmentClasses, TableOptions, DEFAULT_TABLE_CLASS};
pub use table::{
    build_table, parse_row, Alignment, Annotation, Cell, Format, Modifier, ParsedRow, Row, Span,
    Table,
};
