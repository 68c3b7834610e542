//! Row classifier
//!
//! Each source line is one of four row kinds, tried in this order:
//!
//! 1. legacy format row: `|:---|:---:|---:|`
//! 2. format row: `|:< |:># |`
//! 3. caption row: `|!.cls Caption text |`
//! 4. content row: `| a |> b |`
//!
//! A line that matches none of them makes the whole block "not a table".

use lazy_static::lazy_static;
use regex::Regex;

use super::format::{Alignment, Annotation, Modifier};
use super::grammar::{cell_content, class_names, maybe_annotations};
use super::scanner::Scanner;
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

lazy_static! {
    static ref LEGACY_FORMAT_ROW: Regex =
        Regex::new(r"^\|\s*(?::?-{3,}:?\s*\|\s*)+$").unwrap();
    static ref FORMAT_ROW_START: Regex = Regex::new(r"^\s*\|:").unwrap();
    static ref FORMAT_ROW_END: Regex = Regex::new(r"^\s*\|\s*$").unwrap();
    static ref FORMAT_SLOT: Regex = Regex::new(r"^\s*\|:?\s*").unwrap();
    static ref CAPTION_START: Regex = Regex::new(r"^\s*\|!").unwrap();
    static ref CELL_OPEN: Regex = Regex::new(r"^\s*\|").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
    static ref NOT_PIPE: Regex = Regex::new(r"^[^|]+").unwrap();
}

const FORMAT_HELP: &str = "A table should contain two or more rows, each starting \
    and ending with a pipe character (\"|\").";

/// One content cell as written: annotations plus raw text fragments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCell {
    pub annotations: Vec<Annotation>,
    pub fragments: Vec<String>,
}

impl ParsedCell {
    /// Placeholder for columns a row does not reach
    pub fn empty() -> Self {
        Self::default()
    }

    /// Trimmed text of the cell
    pub fn text(&self) -> String {
        self.fragments.concat().trim().to_string()
    }
}

/// The `|!` row: table classes plus caption text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCaption {
    /// Class names, without the leading dot
    pub classes: Vec<String>,
    pub fragments: Vec<String>,
}

impl ParsedCaption {
    pub fn text(&self) -> String {
        self.fragments.concat().trim().to_string()
    }
}

/// A classified source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRow {
    /// Commonmark-style delimiter row, one alignment per column
    LegacyFormat(Vec<Vec<Annotation>>),
    /// `|:` row, one annotation list per column
    Format(Vec<Vec<Annotation>>),
    Content(Vec<ParsedCell>),
    Caption(ParsedCaption),
}

impl ParsedRow {
    /// Number of columns this row contributes to the table width
    pub fn width(&self) -> usize {
        match self {
            ParsedRow::LegacyFormat(formats) | ParsedRow::Format(formats) => formats.len(),
            ParsedRow::Content(cells) => cells.len(),
            ParsedRow::Caption(_) => 1,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, ParsedRow::Content(_))
    }
}

/// Classify one source line.
///
/// `line_no` is 1-indexed and only used for diagnostics. Returns `None` (after
/// reporting an error) when the line is not a table row.
pub fn parse_row(
    source: &str,
    line_no: usize,
    sink: &mut dyn DiagnosticSink,
) -> Option<ParsedRow> {
    let line = source.trim();

    legacy_format_row(line)
        .or_else(|| format_row(line, line_no, sink))
        .or_else(|| caption_row(line))
        .or_else(|| content_row(line))
        .or_else(|| {
            sink.report(
                Diagnostic::error(
                    DiagnosticKind::UnclassifiableRow,
                    "can't decipher table row",
                )
                .with_line(line_no)
                .with_source(line)
                .with_suggestion(FORMAT_HELP),
            );
            None
        })
}

fn legacy_format_row(line: &str) -> Option<ParsedRow> {
    if !LEGACY_FORMAT_ROW.is_match(line) {
        return None;
    }

    let parts: Vec<&str> = line.split('|').collect();
    let formats = parts[1..parts.len() - 1]
        .iter()
        .map(|part| vec![Annotation::new(Modifier::Align(legacy_alignment(part.trim())))])
        .collect();

    Some(ParsedRow::LegacyFormat(formats))
}

/// `:---` is left, `---:` is right; `:---:` and `---` are both the default.
fn legacy_alignment(delimiter: &str) -> Alignment {
    match (delimiter.starts_with(':'), delimiter.ends_with(':')) {
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        _ => Alignment::Center,
    }
}

fn format_row(line: &str, line_no: usize, sink: &mut dyn DiagnosticSink) -> Option<ParsedRow> {
    let mut row = Scanner::new(line);
    if !row.check(&FORMAT_ROW_START) {
        return None;
    }

    let mut formats = Vec::new();
    let mut ignored = Vec::new();

    loop {
        if row.scan(&FORMAT_ROW_END).is_some() {
            break;
        }
        row.scan(&FORMAT_SLOT)?;

        let annotations = maybe_annotations(&mut row);
        row.skip(&WHITESPACE);
        if let Some(junk) = row.scan(&NOT_PIPE) {
            ignored.push((formats.len(), junk.trim_end()));
        }
        formats.push(annotations);
    }

    // Only report once the line is known to be a format row
    for (col, junk) in ignored {
        sink.report(
            Diagnostic::warning(
                DiagnosticKind::UnrecognizedAnnotation,
                format!(
                    "ignoring invalid format \"{}\" in column {}",
                    junk,
                    col + 1
                ),
            )
            .with_line(line_no)
            .with_source(line)
            .with_suggestion("format slots accept < = > ^ { # .class and a ... suffix"),
        );
    }

    Some(ParsedRow::Format(formats))
}

fn caption_row(line: &str) -> Option<ParsedRow> {
    let mut row = Scanner::new(line);
    row.scan(&CAPTION_START)?;

    let classes = class_names(&mut row);
    let fragments = cell_content(&mut row);

    Some(ParsedRow::Caption(ParsedCaption { classes, fragments }))
}

fn content_row(line: &str) -> Option<ParsedRow> {
    let mut row = Scanner::new(line);
    let mut cells = Vec::new();

    while let Some(cell) = content_cell(&mut row) {
        cells.push(cell);
    }

    if cells.is_empty() {
        None
    } else {
        Some(ParsedRow::Content(cells))
    }
}

fn content_cell(row: &mut Scanner<'_>) -> Option<ParsedCell> {
    row.scan(&CELL_OPEN)?;

    // The closing pipe of the line
    if row.rest().trim().is_empty() {
        return None;
    }

    let annotations = maybe_annotations(row);
    row.skip(&WHITESPACE);
    let fragments = cell_content(row);
    if fragments.is_empty() {
        return None;
    }

    Some(ParsedCell {
        annotations,
        fragments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::format::Span;
    use crate::utils::diagnostics::Diagnostics;

    fn classify(line: &str) -> (Option<ParsedRow>, Diagnostics) {
        let mut diags = Diagnostics::new();
        let row = parse_row(line, 1, &mut diags);
        (row, diags)
    }

    fn align(a: Alignment) -> Vec<Annotation> {
        vec![Annotation::new(Modifier::Align(a))]
    }

    fn texts(row: &ParsedRow) -> Vec<String> {
        match row {
            ParsedRow::Content(cells) => cells.iter().map(ParsedCell::text).collect(),
            other => panic!("expected content row, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_format_row() {
        let (row, diags) = classify("|:--- |:---: | ---: | --- |");
        assert!(diags.is_empty());
        assert_eq!(
            row,
            Some(ParsedRow::LegacyFormat(vec![
                align(Alignment::Left),
                align(Alignment::Center),
                align(Alignment::Right),
                align(Alignment::Center),
            ]))
        );
    }

    #[test]
    fn test_legacy_needs_three_dashes() {
        let (row, _) = classify("| -- |");
        assert_eq!(row.map(|r| r.is_content()), Some(true));
    }

    #[test]
    fn test_format_row() {
        let (row, diags) = classify("|:< |:= |:> |");
        assert!(diags.is_empty());
        assert_eq!(
            row,
            Some(ParsedRow::Format(vec![
                align(Alignment::Left),
                align(Alignment::Center),
                align(Alignment::Right),
            ]))
        );
    }

    #[test]
    fn test_format_row_with_empty_slots() {
        let (row, _) = classify("|:  |>…  |   |<  |");
        let Some(ParsedRow::Format(formats)) = row else {
            panic!("expected format row");
        };
        assert_eq!(formats.len(), 4);
        assert!(formats[0].is_empty());
        assert_eq!(
            formats[1],
            vec![Annotation::repeated(Modifier::Align(Alignment::Right))]
        );
        assert!(formats[2].is_empty());
        assert_eq!(formats[3], align(Alignment::Left));
    }

    #[test]
    fn test_format_row_reports_unknown_tokens() {
        let (row, diags) = classify("|:< wat |:# |");
        let Some(ParsedRow::Format(formats)) = row else {
            panic!("expected format row");
        };
        assert_eq!(formats[0], align(Alignment::Left));
        assert_eq!(formats[1], vec![Annotation::new(Modifier::Heading)]);

        assert_eq!(diags.count_of(DiagnosticKind::UnrecognizedAnnotation), 1);
        assert!(diags.diagnostics[0].message.contains("\"wat\""));
        assert!(!diags.has_errors());
    }

    #[test]
    fn test_unterminated_format_row_falls_back_to_content() {
        let (row, diags) = classify("|:< |:>");
        assert!(diags.is_empty());
        assert_eq!(texts(&row.unwrap()), vec![":<", ":>"]);
    }

    #[test]
    fn test_caption_row() {
        let (row, _) = classify("|!.c1.c2 Caption, My Caption |");
        let Some(ParsedRow::Caption(caption)) = row else {
            panic!("expected caption row");
        };
        assert_eq!(caption.classes, vec!["c1", "c2"]);
        assert_eq!(caption.text(), "Caption, My Caption");
    }

    #[test]
    fn test_content_row() {
        let (row, _) = classify("  | a |  b  |");
        assert_eq!(texts(&row.unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn test_content_row_empty_cells() {
        let (row, _) = classify("|   | e | f |");
        assert_eq!(texts(&row.unwrap()), vec!["", "e", "f"]);
    }

    #[test]
    fn test_content_row_annotations() {
        let (row, _) = classify("|{e |.c2.c3> e |");
        let Some(ParsedRow::Content(cells)) = row else {
            panic!("expected content row");
        };
        assert_eq!(
            cells[0].annotations,
            vec![Annotation::new(Modifier::Span(Span::Column))]
        );
        assert_eq!(cells[1].annotations.len(), 3);
        assert_eq!(cells[1].text(), "e");
    }

    #[test]
    fn test_annotations_must_touch_the_pipe() {
        let (row, _) = classify("| .c1 a |");
        let Some(ParsedRow::Content(cells)) = row else {
            panic!("expected content row");
        };
        assert!(cells[0].annotations.is_empty());
        assert_eq!(cells[0].text(), ".c1 a");
    }

    #[test]
    fn test_pipe_in_code_does_not_split() {
        let (row, _) = classify("| `a|b` | c |");
        assert_eq!(texts(&row.unwrap()), vec!["`a|b`", "c"]);
    }

    #[test]
    fn test_missing_closing_pipe_still_content() {
        let (row, _) = classify("| a | b");
        assert_eq!(texts(&row.unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn test_unclassifiable_row() {
        let (row, diags) = classify("not a row");
        assert!(row.is_none());
        assert_eq!(diags.count_of(DiagnosticKind::UnclassifiableRow), 1);
        assert_eq!(diags.diagnostics[0].source_text.as_deref(), Some("not a row"));

        let (row, _) = classify("|");
        assert!(row.is_none());
    }

    #[test]
    fn test_widths() {
        assert_eq!(classify("| a | b | c |").0.unwrap().width(), 3);
        assert_eq!(classify("|:< |:> |").0.unwrap().width(), 2);
        assert_eq!(classify("|!.x Title |").0.unwrap().width(), 1);
    }
}
