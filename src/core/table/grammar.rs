//! Annotation grammar and cell-text tokenizer
//!
//! Annotations are the short tokens written straight after a cell's opening
//! pipe (or after `|:` in a format row):
//!
//! ```text
//! <  =  >      alignment
//! ^  {         row span / column span (exclusive: nothing else may follow)
//! .name        CSS class
//! #            heading cell
//! ... or …     suffix: repeat the preceding token in later columns
//! ```
//!
//! Cell text is split into fragments so that a pipe inside `` `code` ``,
//! `$math$` or written as `\|` does not end the cell.

use lazy_static::lazy_static;
use regex::Regex;

use super::format::{Alignment, Annotation, Modifier, Span};
use super::scanner::Scanner;

lazy_static! {
    static ref SPAN: Regex = Regex::new(r"^[{^]").unwrap();
    static ref ALIGNMENT: Regex = Regex::new(r"^[<=>]").unwrap();
    // A class name may not start with a digit, so `.5` stays cell text
    static ref CLASS: Regex = Regex::new(r"^\.[-_A-Za-z][-\w]*").unwrap();
    static ref HEADING: Regex = Regex::new(r"^#").unwrap();
    static ref REPEAT: Regex = Regex::new(r"^(?:\.\.\.|…)").unwrap();

    static ref INLINE_CODE: Regex = Regex::new(r"^`[^`]+`").unwrap();
    static ref INLINE_MATH: Regex = Regex::new(r"^\$[^$]+\$").unwrap();
    static ref ESCAPED_PIPE: Regex = Regex::new(r"^\\\|").unwrap();
    static ref TEXT_RUN: Regex = Regex::new(r"^(?:[^`$|\\]|\\[^|]|\\$)+").unwrap();
    // An opening delimiter with no partner is plain text
    static ref STRAY_DELIMITER: Regex = Regex::new(r"^[`$]").unwrap();
}

/// Parse the annotations of one cell or format slot.
///
/// A span marker, if present, is the only annotation of the slot.
pub fn maybe_annotations(row: &mut Scanner<'_>) -> Vec<Annotation> {
    match span_modifier(row) {
        Some(span) => vec![Annotation::new(Modifier::Span(span))],
        None => other_annotations(row),
    }
}

fn span_modifier(row: &mut Scanner<'_>) -> Option<Span> {
    row.scan(&SPAN)
        .and_then(|tok| tok.chars().next())
        .and_then(Span::from_token)
}

fn other_annotations(row: &mut Scanner<'_>) -> Vec<Annotation> {
    let mut result = Vec::new();
    while let Some(modifier) = other_modifier(row) {
        if row.scan(&REPEAT).is_some() {
            result.push(Annotation::repeated(modifier));
        } else {
            result.push(Annotation::new(modifier));
        }
    }
    result
}

fn other_modifier(row: &mut Scanner<'_>) -> Option<Modifier> {
    alignment_modifier(row)
        .or_else(|| class_modifier(row).map(Modifier::Class))
        .or_else(|| heading_modifier(row))
}

fn alignment_modifier(row: &mut Scanner<'_>) -> Option<Modifier> {
    row.scan(&ALIGNMENT)
        .and_then(|tok| tok.chars().next())
        .and_then(Alignment::from_token)
        .map(Modifier::Align)
}

fn class_modifier(row: &mut Scanner<'_>) -> Option<String> {
    row.scan(&CLASS).map(|tok| tok[1..].to_string())
}

fn heading_modifier(row: &mut Scanner<'_>) -> Option<Modifier> {
    row.scan(&HEADING).map(|_| Modifier::Heading)
}

/// Class annotations only, as allowed at the start of a caption row
pub fn class_names(row: &mut Scanner<'_>) -> Vec<String> {
    let mut result = Vec::new();
    while let Some(name) = class_modifier(row) {
        result.push(name);
    }
    result
}

/// Read cell text up to (not including) the next unescaped pipe.
///
/// Returns the raw fragments. A cell with no text that is directly followed
/// by a pipe yields a single empty fragment: it is present but empty.
pub fn cell_content(row: &mut Scanner<'_>) -> Vec<String> {
    let mut result = Vec::new();
    while let Some(fragment) = cell_fragment(row) {
        result.push(fragment.to_string());
    }

    if result.is_empty() && row.peek() == Some('|') {
        result.push(String::new());
    }

    result
}

fn cell_fragment<'a>(row: &mut Scanner<'a>) -> Option<&'a str> {
    row.scan(&INLINE_CODE)
        .or_else(|| row.scan(&INLINE_MATH))
        .or_else(|| row.scan(&ESCAPED_PIPE))
        .or_else(|| row.scan(&TEXT_RUN))
        .or_else(|| row.scan(&STRAY_DELIMITER))
}
