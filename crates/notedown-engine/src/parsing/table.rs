//! Table decoding.
//!
//! Candidate lines arrive from the builder as one contiguous unit. Two
//! layouts are accepted: the standard one-row-per-line form, and a
//! concatenated form where several logical rows are joined on one line by
//! `||` (an upstream serialization quirk). The header/body split is a
//! heuristic, not a validation: a table with no separator row still
//! decodes, with row 1 as the sole header.

use super::inline::parse_inline;
use super::kinds::TableRow;
use crate::doc::{CellAttrs, Node};

/// Decodes candidate lines into a `table` node, or `None` below two
/// effective rows (the caller falls back to paragraph handling).
pub fn decode(lines: &[String]) -> Option<Node> {
    let mut rows: Vec<String> = Vec::new();
    for line in lines {
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        if t.contains(TableRow::ROW_JOIN) {
            for fragment in t.split(TableRow::ROW_JOIN) {
                let f = fragment.trim();
                if !f.is_empty() {
                    rows.push(repair(f));
                }
            }
        } else {
            rows.push(t.to_string());
        }
    }
    if rows.len() < 2 {
        return None;
    }

    let separator = rows.iter().position(|r| TableRow::is_separator(r));
    let (header_rows, body_rows): (&[String], &[String]) = match separator {
        Some(i) => (&rows[..i], &rows[i + 1..]),
        None => (&rows[..1], &rows[1..]),
    };

    let mut content = Vec::with_capacity(header_rows.len() + body_rows.len());
    for row in header_rows {
        content.push(build_row(row, true));
    }
    for row in body_rows {
        content.push(build_row(row, false));
    }
    Some(Node::Table { content })
}

/// Re-frames a `||`-split fragment so it starts and ends with one pipe.
fn repair(fragment: &str) -> String {
    let mut row = String::new();
    if !fragment.starts_with(TableRow::PIPE) {
        row.push(TableRow::PIPE);
    }
    row.push_str(fragment);
    if !fragment.ends_with(TableRow::PIPE) || fragment.len() == 1 {
        row.push(TableRow::PIPE);
    }
    row
}

fn build_row(row: &str, header: bool) -> Node {
    let cells = TableRow::split_cells(row)
        .into_iter()
        .map(|cell| {
            let content = vec![Node::paragraph(parse_inline(cell))];
            if header {
                Node::TableHeaderCell {
                    attrs: CellAttrs::default(),
                    content,
                }
            } else {
                Node::TableCell {
                    attrs: CellAttrs::default(),
                    content,
                }
            }
        })
        .collect();
    Node::TableRow { content: cells }
}
