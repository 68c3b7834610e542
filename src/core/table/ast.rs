//! The table model and the pipeline that builds it

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Row};
use super::format::{Annotation, Format, Modifier};
use super::parser::{parse_row, ParsedCaption, ParsedCell, ParsedRow};
use super::spans::{resolve_colspans, resolve_rowspans};
use crate::core::options::TableOptions;
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::utils::error::{TableError, TableResult};

/// A parsed table with every row and cell property calculated.
///
/// Table-level information is available as fields. The content rows are
/// split into header and body rows by [`Table::split_out_head`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Number of content rows (header rows included)
    pub row_count: usize,
    /// Widest source row, format rows included
    pub col_count: usize,
    /// Text following the classes of the last `|!` row with any text
    pub caption: Option<String>,
    /// Classes for the table element, starting with the configured default
    pub table_classes: Vec<String>,
    default_formats: Vec<Format>,
    seen_legacy: bool,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table of a fixed size.
    ///
    /// `row_count` is the number of content rows that will be added.
    pub fn new(row_count: usize, col_count: usize, table_class: impl Into<String>) -> Self {
        Table {
            row_count,
            col_count,
            caption: None,
            table_classes: vec![table_class.into()],
            default_formats: vec![Format::default(); col_count],
            seen_legacy: false,
            rows: Vec::with_capacity(row_count),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current default format of each column
    pub fn default_formats(&self) -> &[Format] {
        &self.default_formats
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cell_at(col))
    }

    /// Fold one classified row into the table
    pub fn add_row(&mut self, row: &ParsedRow) {
        match row {
            ParsedRow::Content(cells) => self.add_content_row(cells),
            ParsedRow::Format(formats) => self.add_format_row(formats),
            ParsedRow::LegacyFormat(formats) => self.add_legacy_format_row(formats),
            ParsedRow::Caption(caption) => self.add_caption_row(caption),
        }
    }

    /// Append a content row, padded to `col_count` with empty cells.
    pub fn add_content_row(&mut self, cells: &[ParsedCell]) {
        let empty = ParsedCell::empty();
        let mut row = Row::new();
        let mut row_format: Vec<Modifier> = Vec::new();

        for col in 0..self.col_count {
            let raw = cells.get(col).unwrap_or(&empty);
            let (cell, propagate) = Cell::from_parsed(raw, &self.default_formats[col], &row_format);
            row_format.extend(propagate);
            row.push(cell);
        }

        self.rows.push(row);
    }

    /// Merge a format row into the column defaults. Only later rows see it.
    pub fn add_format_row(&mut self, formats: &[Vec<Annotation>]) {
        let mut row_format: Vec<Modifier> = Vec::new();

        for col in 0..self.col_count {
            let own = formats.get(col).map(Vec::as_slice).unwrap_or(&[]);
            let merged = self.default_formats[col].merge(&row_format, own);
            self.default_formats[col] = merged.format;
            row_format.extend(merged.propagate);
        }
    }

    /// Like [`Table::add_format_row`]; the first one also turns every row
    /// so far into a header row.
    pub fn add_legacy_format_row(&mut self, formats: &[Vec<Annotation>]) {
        self.add_format_row(formats);
        if !self.seen_legacy {
            self.make_rows_into_heading();
            self.seen_legacy = true;
        }
    }

    fn make_rows_into_heading(&mut self) {
        for cell in self.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
            cell.format.heading = true;
        }
    }

    /// Classes accumulate over caption rows; the last non-empty text wins.
    pub fn add_caption_row(&mut self, caption: &ParsedCaption) {
        self.table_classes.extend(caption.classes.iter().cloned());

        let text = caption.text();
        if !text.is_empty() {
            self.caption = Some(text);
        }
    }

    /// Resolve column spans, then row spans
    pub fn merge_spans(&mut self, sink: &mut dyn DiagnosticSink) {
        resolve_colspans(&mut self.rows, sink);
        resolve_rowspans(&mut self.rows, self.col_count, sink);
    }

    /// Split rows into a leading run of header-looking rows and the rest.
    ///
    /// A header-looking row after the first body row stays in the body.
    pub fn split_out_head(&self) -> (&[Row], &[Row]) {
        let head_len = self
            .rows
            .iter()
            .take_while(|row| row.looks_like_header())
            .count();
        self.rows.split_at(head_len)
    }
}

/// Join lines ending in a backslash with the line that follows
pub fn merge_continuation_lines(text: &str) -> String {
    text.replace("\\\r\n", "").replace("\\\n", "")
}

/// Trim the block and split it into physical lines
pub fn split_into_rows(text: &str) -> Vec<&str> {
    text.trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Classify every line of a block, stopping at the first line that is not a
/// table row.
pub fn classify_rows(text: &str, sink: &mut dyn DiagnosticSink) -> TableResult<Vec<ParsedRow>> {
    let mut parsed = Vec::new();

    for (idx, line) in split_into_rows(text).into_iter().enumerate() {
        match parse_row(line, idx + 1, sink) {
            Some(row) => parsed.push(row),
            None => return Err(TableError::unclassifiable_row(idx + 1, line.trim())),
        }
    }

    Ok(parsed)
}

/// Run the whole pipeline: classify, size, fold, resolve spans.
pub fn build_table(
    text: &str,
    options: &TableOptions,
    sink: &mut dyn DiagnosticSink,
) -> TableResult<Table> {
    options.validate()?;

    let merged;
    let text = if options.line_continuation {
        merged = merge_continuation_lines(text);
        merged.as_str()
    } else {
        text
    };

    // An empty block still splits into one empty line, which no row kind
    // accepts; report it as an empty table instead.
    if text.trim().is_empty() {
        sink.report(Diagnostic::error(
            DiagnosticKind::EmptyTable,
            "table has no rows",
        ));
        return Err(TableError::empty_table());
    }

    let parsed = classify_rows(text, sink)?;

    let row_count = parsed.iter().filter(|row| row.is_content()).count();
    let col_count = parsed.iter().map(ParsedRow::width).max().unwrap_or(0);
    log::debug!(
        "classified {} rows: {} content rows, {} columns",
        parsed.len(),
        row_count,
        col_count
    );

    let mut table = Table::new(row_count, col_count, options.table_class.clone());
    for row in &parsed {
        table.add_row(row);
    }
    table.merge_spans(sink);

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::format::{Alignment, Span};
    use crate::utils::diagnostics::Diagnostics;

    fn build(lines: &[&str]) -> Table {
        let mut diags = Diagnostics::new();
        build_table(&lines.join("\n"), &TableOptions::default(), &mut diags)
            .expect("table should parse")
    }

    fn contents(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows()
            .iter()
            .map(|r| r.cells.iter().map(|c| c.content.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_dimensions() {
        let table = build(&["| a | b |", "|:< |:= |:> |", "| g |"]);
        assert_eq!(table.row_count, 2);
        assert_eq!(table.col_count, 3);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.default_formats().len(), 3);
        assert!(table.rows().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_format_row_is_not_retroactive() {
        let table = build(&["| a |", "|:> |", "| b |"]);
        assert_eq!(table.cell(0, 0).unwrap().format.alignment, Alignment::Center);
        assert_eq!(table.cell(1, 0).unwrap().format.alignment, Alignment::Right);
    }

    #[test]
    fn test_second_legacy_row_does_not_mark_headings() {
        let table = build(&[
            "| a |",
            "|:---|",
            "| b |",
            "| ---: |",
            "| c |",
        ]);
        let heading: Vec<bool> = (0..3).map(|r| table.cell(r, 0).unwrap().format.heading).collect();
        assert_eq!(heading, vec![true, false, false]);
        assert_eq!(table.cell(1, 0).unwrap().format.alignment, Alignment::Left);
        assert_eq!(table.cell(2, 0).unwrap().format.alignment, Alignment::Right);
    }

    #[test]
    fn test_caption_rows_accumulate_classes() {
        let table = build(&["|!.a First |", "| x |", "|!.b |", "|! Last |"]);
        assert_eq!(table.table_classes, vec!["tableau-table", "a", "b"]);
        assert_eq!(table.caption.as_deref(), Some("Last"));
        assert_eq!(table.row_count, 1);
    }

    #[test]
    fn test_repeat_does_not_leak_into_next_row() {
        let table = build(&["| a |>… b | c |", "| d | e | f |"]);
        assert_eq!(table.cell(0, 2).unwrap().format.alignment, Alignment::Right);
        assert_eq!(table.cell(1, 2).unwrap().format.alignment, Alignment::Center);
    }

    #[test]
    fn test_split_out_head_is_a_prefix() {
        let table = build(&["|# a |# b |", "| c | d |", "|# e |# f |"]);
        let (head, body) = table.split_out_head();
        assert_eq!(head.len(), 1);
        assert_eq!(body.len(), 2);
        assert_eq!(body[1].cells[0].content, "e");
    }

    #[test]
    fn test_hidden_cells_count_as_header() {
        let table = build(&["|# a |{ |", "|^ |# b |", "| c | d |"]);
        let (head, body) = table.split_out_head();
        assert_eq!(head.len(), 2);
        assert_eq!(body.len(), 1);
        assert!(table.cell(0, 1).unwrap().hidden);
        assert_eq!(table.cell(0, 0).unwrap().colspan_count, 1);
        assert_eq!(table.cell(0, 0).unwrap().rowspan_count, 1);
    }

    #[test]
    fn test_span_format_in_format_row() {
        let table = build(&["| a | b |", "|: |:{ |", "| c | d |"]);
        assert!(table.cell(1, 1).unwrap().format.is_span(Span::Column));
        assert_eq!(table.cell(1, 0).unwrap().colspan_count, 1);
        assert_eq!(table.cell(0, 0).unwrap().colspan_count, 0);
    }

    #[test]
    fn test_continuation_lines() {
        let table = build(&["| a | b \\", "| c |", "| d |"]);
        assert_eq!(contents(&table), vec![vec!["a", "b", "c"], vec!["d", "", ""]]);
    }

    #[test]
    fn test_continuation_disabled() {
        let mut diags = Diagnostics::new();
        let table = build_table(
            "| a \\\n| b |",
            &TableOptions::strict_lines(),
            &mut diags,
        )
        .unwrap();
        assert_eq!(contents(&table), vec![vec!["a \\"], vec!["b"]]);
    }

    #[test]
    fn test_crlf_lines() {
        let table = build(&["| a |\r", "| b |\r"]);
        assert_eq!(contents(&table), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_empty_block() {
        let mut diags = Diagnostics::new();
        let err = build_table("  \n ", &TableOptions::default(), &mut diags).unwrap_err();
        assert_eq!(err, TableError::empty_table());
        assert_eq!(diags.count_of(DiagnosticKind::EmptyTable), 1);
    }

    #[test]
    fn test_bad_row_fails_whole_table() {
        let mut diags = Diagnostics::new();
        let err = build_table("| a |\nnope\n| b |", &TableOptions::default(), &mut diags)
            .unwrap_err();
        assert_eq!(err, TableError::unclassifiable_row(2, "nope"));
        assert_eq!(diags.count_of(DiagnosticKind::UnclassifiableRow), 1);
    }

    #[test]
    fn test_invalid_options_are_rejected_before_parsing() {
        let mut diags = Diagnostics::new();
        let opts = TableOptions::new().with_table_class("");
        let err = build_table("| a |", &opts, &mut diags).unwrap_err();
        assert!(!err.is_not_a_table());
        assert!(diags.is_empty());
    }
}
