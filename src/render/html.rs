//! HTML rendering of a parsed table
//!
//! Cell content and the caption are written verbatim: they are still in the
//! host document's markup, and the host is expected to process them further.

use std::fmt::Write;

use crate::core::options::TableOptions;
use crate::core::table::{Cell, Row, Table};

/// Render a table as a single line of HTML
pub fn table_to_html(table: &Table, options: &TableOptions) -> String {
    let (head, body) = table.split_out_head();
    let mut output = String::new();

    let _ = write!(
        output,
        "<table class=\"{}\">",
        table.table_classes.join(" ")
    );

    if let Some(caption) = table.caption.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(output, "<caption>{}</caption>", caption);
    }

    render_section(&mut output, "thead", head, options);
    render_section(&mut output, "tbody", body, options);

    output.push_str("</table>");
    output
}

fn render_section(output: &mut String, tag: &str, rows: &[Row], options: &TableOptions) {
    if rows.is_empty() {
        return;
    }

    let _ = write!(output, "<{}>", tag);
    for row in rows {
        output.push_str("<tr>");
        for cell in row.visible_cells() {
            render_cell(output, cell, options);
        }
        output.push_str("</tr>");
    }
    let _ = write!(output, "</{}>", tag);
}

fn render_cell(output: &mut String, cell: &Cell, options: &TableOptions) {
    let tag = if cell.format.heading { "th" } else { "td" };
    let _ = write!(output, "<{}", tag);

    // Counts exclude the spanning cell itself
    if cell.rowspan_count > 0 {
        let _ = write!(output, " rowspan=\"{}\"", cell.rowspan_count + 1);
    }
    if cell.colspan_count > 0 {
        let _ = write!(output, " colspan=\"{}\"", cell.colspan_count + 1);
    }

    let mut classes: Vec<&str> = cell.format.css_classes.iter().map(String::as_str).collect();
    classes.push(options.alignment_classes.class_for(cell.format.alignment));
    let _ = write!(output, " class=\"{}\">{}</{}>", classes.join(" "), cell.content, tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::build_table;
    use crate::utils::diagnostics::Diagnostics;

    fn render(text: &str) -> String {
        let opts = TableOptions::default();
        let mut diags = Diagnostics::new();
        let table = build_table(text, &opts, &mut diags).unwrap();
        table_to_html(&table, &opts)
    }

    #[test]
    fn test_simple_body() {
        assert_eq!(
            render("| a | b |\n| c | d |"),
            "<table class=\"tableau-table\"><tbody>\
             <tr><td class=\"a-c\">a</td><td class=\"a-c\">b</td></tr>\
             <tr><td class=\"a-c\">c</td><td class=\"a-c\">d</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_head_and_body() {
        let html = render("|# a |# b |\n| c | d |");
        assert!(html.contains(
            "<thead><tr><th class=\"a-c\">a</th><th class=\"a-c\">b</th></tr></thead>"
        ));
        assert!(html.contains("<tbody><tr><td class=\"a-c\">c</td>"));
    }

    #[test]
    fn test_spans_and_hidden_cells() {
        let html = render("| a |{ |\n|^ | b |");
        assert!(html.contains("<td rowspan=\"2\" colspan=\"2\" class=\"a-c\">a</td>"));
        assert_eq!(html.matches("<td").count(), 2);
    }

    #[test]
    fn test_classes_caption_and_alignment() {
        let html = render("|!.wide Totals |\n|.num> 1 |< 2 |");
        assert!(html.starts_with("<table class=\"tableau-table wide\"><caption>Totals</caption>"));
        assert!(html.contains("<td class=\"num a-r\">1</td>"));
        assert!(html.contains("<td class=\"a-l\">2</td>"));
    }

    #[test]
    fn test_custom_alignment_classes() {
        let opts = TableOptions::default().with_alignment_classes(crate::core::AlignmentClasses {
            left: "text-left".into(),
            center: "text-center".into(),
            right: "text-right".into(),
        });
        let mut diags = Diagnostics::new();
        let table = build_table("|> x |", &opts, &mut diags).unwrap();
        assert!(table_to_html(&table, &opts).contains("class=\"text-right\""));
    }
}
