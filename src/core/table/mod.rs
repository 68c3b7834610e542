//! Pipe Table Parser
//!
//! Turns a block of pipe-delimited rows into a [`Table`]:
//!
//! ```text
//! Raw text -> Lines -> Row classification -> Column defaults + cells -> Span passes
//! ```
//!
//! # Row kinds
//!
//! - content rows `| a |> b |`, one cell per pipe
//! - format rows `|:< |:.num… |`, which change the column defaults for
//!   every later row
//! - legacy delimiter rows `|:---|---:|`, which also turn every row above
//!   them into header rows (the first time only)
//! - caption rows `|!.cls Caption |`
//!
//! # Example
//!
//! ```ignore
//! use table::{build_table, TableOptions};
//!
//! let table = build_table("|# a |# b |\n| 1 | 2 |", &TableOptions::default(), &mut sink)?;
//! let (head, body) = table.split_out_head();
//! ```

mod ast;
mod cell;
mod format;
mod grammar;
mod parser;
mod scanner;
mod spans;


// Re-export public API
pub use ast::{build_table, classify_rows, merge_continuation_lines, split_into_rows, Table};
pub use cell::{Cell, Row};
pub use format::{Alignment, Annotation, Format, Merged, Modifier, Span};
pub use parser::{parse_row, ParsedCaption, ParsedCell, ParsedRow};
pub use spans::{resolve_colspans, resolve_rowspans};
