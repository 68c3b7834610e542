//! # tableau
//!
//! Parser for a compact, pipe-delimited table markup with per-column formats,
//! cell spans, CSS classes, header rows and captions.
//!
//! ## Features
//!
//! - **Commonmark compatible**: plain `| a | b |` tables and `|:---|---:|`
//!   delimiter rows work as expected
//! - **Column formats**: `|:< |:.num> |` rows set defaults for every later row
//! - **Repeat modifier**: `>…` applies to the current column and the rest of the row
//! - **Spans**: `{` joins a cell to its left neighbour, `^` to the cell above
//! - **Captions and table classes**: `|!.wide Quarterly totals |`
//! - **Inline code and math**: pipes inside `` `...` `` and `$...$` stay in the cell
//!
//! ## Usage Examples
//!
//! ```rust
//! use tableau::{looks_like_table, to_ast};
//!
//! let source = "|# Name |# Qty |\n| apple |> 3 |\n| pear |> 12 |";
//! assert!(looks_like_table(source));
//!
//! let table = to_ast(source).expect("a table");
//! let (head, body) = table.split_out_head();
//! assert_eq!(head.len(), 1);
//! assert_eq!(body.len(), 2);
//! assert_eq!(body[1].cells[0].content, "pear");
//! ```
//!
//! ### Collecting diagnostics
//!
//! ```rust
//! use tableau::diagnostics::{DiagnosticKind, Diagnostics};
//! use tableau::{parse_table_with, TableOptions};
//!
//! let mut diags = Diagnostics::new();
//! let result = parse_table_with("| a |\nnot a row", &TableOptions::default(), &mut diags);
//! assert!(result.is_err());
//! assert_eq!(diags.count_of(DiagnosticKind::UnclassifiableRow), 1);
//! ```
//!
//! ### HTML
//!
//! ```rust
//! let html = tableau::parse_to_html("| a |{ |\n| b | c |").unwrap();
//! assert!(html.contains("<td colspan=\"2\" class=\"a-c\">a</td>"));
//! ```

/// Core parsing modules
pub mod core;

/// Output adapters
pub mod render;

/// Utility modules
pub mod utils;

pub use crate::core::options::{AlignmentClasses, TableOptions, DEFAULT_TABLE_CLASS};
pub use crate::core::table::{
    Alignment, Annotation, Cell, Format, Modifier, ParsedCaption, ParsedCell, ParsedRow, Row,
    Span, Table,
};
pub use render::table_to_html;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{NotATableReason, TableError, TableResult};

use utils::diagnostics::{DiagnosticSink, LogSink};

/// Parse a table block with default options.
///
/// Returns `None` if the block is not a table. Diagnostics go to the `log`
/// facade.
pub fn to_ast(text: &str) -> Option<Table> {
    parse_table(text).ok()
}

/// Parse a table block with default options, reporting through `log`
pub fn parse_table(text: &str) -> TableResult<Table> {
    parse_table_with(text, &TableOptions::default(), &mut LogSink)
}

/// Parse a table block with custom options and diagnostic sink
///
/// # Arguments
/// * `text` - The block, rows separated by newlines
/// * `options` - Parse options
/// * `sink` - Receives every diagnostic, fatal or not
pub fn parse_table_with(
    text: &str,
    options: &TableOptions,
    sink: &mut dyn DiagnosticSink,
) -> TableResult<Table> {
    crate::core::table::build_table(text, options, sink)
}

/// Parse a block and render it as HTML, or `None` if it is not a table
pub fn parse_to_html(text: &str) -> Option<String> {
    let options = TableOptions::default();
    parse_table_with(text, &options, &mut LogSink)
        .ok()
        .map(|table| table_to_html(&table, &options))
}

/// Quick test a host can run before handing a block over for parsing.
///
/// True when the block has at least two lines and every line, trimmed,
/// starts and ends with a pipe. Passing this test does not guarantee that
/// [`to_ast`] accepts the block.
pub fn looks_like_table(block: &str) -> bool {
    let lines: Vec<&str> = block.trim().lines().map(str::trim).collect();

    lines.len() >= 2
        && lines
            .iter()
            .all(|line| line.len() >= 3 && line.starts_with('|') && line.ends_with('|'))
}
