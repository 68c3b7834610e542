//! Row and column span resolution
//!
//! Both passes walk backwards: a `{` cell hands its count to the nearest cell
//! on its left without a `{`, a `^` cell to the nearest cell above it without
//! a `^`. Each pass only reads `format.span`, so they do not interact and can
//! run in either order.

use super::cell::Row;
use super::format::Span;
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

/// Fold `{` cells into the cell to their left, row by row.
pub fn resolve_colspans(rows: &mut [Row], sink: &mut dyn DiagnosticSink) {
    for (row_idx, row) in rows.iter_mut().enumerate() {
        let mut count = 0;
        for cell in row.cells.iter_mut().rev() {
            if cell.format.is_span(Span::Column) {
                count += 1;
                cell.hidden = true;
            } else {
                cell.colspan_count = count;
                count = 0;
            }
        }

        if count > 0 {
            sink.report(
                Diagnostic::error(
                    DiagnosticKind::InvalidSpan,
                    format!(
                        "cannot span horizontally in first column of table (row {})",
                        row_idx + 1
                    ),
                )
                .with_suggestion("remove the '{' marker from the first cell of the row"),
            );
        }
    }
}

/// Fold `^` cells into the cell above them, column by column.
pub fn resolve_rowspans(rows: &mut [Row], col_count: usize, sink: &mut dyn DiagnosticSink) {
    for col in (0..col_count).rev() {
        let mut count = 0;
        for row in rows.iter_mut().rev() {
            let Some(cell) = row.cells.get_mut(col) else {
                continue;
            };
            if cell.format.is_span(Span::Row) {
                count += 1;
                cell.hidden = true;
            } else {
                cell.rowspan_count = count;
                count = 0;
            }
        }

        if count > 0 {
            sink.report(
                Diagnostic::error(
                    DiagnosticKind::InvalidSpan,
                    format!(
                        "cannot span vertically in top row of table (column {})",
                        col + 1
                    ),
                )
                .with_suggestion("remove the '^' marker from the first row"),
            );
        }
    }
}
