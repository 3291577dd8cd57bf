//! Plain-text projection for the search-index column.
//!
//! Intentionally lossy and one-directional: markup is dropped, visible
//! text survives. Labels stand in for links, code keeps its content
//! without fences, and structural markers (headings, quotes, list boxes,
//! rules) disappear entirely.

use std::sync::OnceLock;

use regex::Regex;

use crate::doc::Node;
use crate::parsing::convert;

/// Flattens markdown into indexable plain text. Always succeeds.
pub fn to_plain_text(markdown: &str) -> String {
    let doc = convert(markdown);
    let mut blocks = Vec::new();
    collect_blocks(&doc, &mut blocks);
    let joined = blocks.join("\n\n");

    static EXTRA_NEWLINES: OnceLock<Regex> = OnceLock::new();
    let extra_newlines =
        EXTRA_NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));
    extra_newlines.replace_all(&joined, "\n\n").trim().to_string()
}

/// Pushes one string per block-level construct; nested text is flattened
/// into its owning block.
fn collect_blocks(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Doc { content } => {
            for child in content {
                collect_blocks(child, out);
            }
        }
        Node::Paragraph { content } | Node::Heading { content, .. } => {
            let text = runs_text(content);
            if !text.is_empty() {
                out.push(text);
            }
        }
        Node::BulletList { content }
        | Node::OrderedList { content }
        | Node::TaskList { content } => {
            let lines: Vec<String> = content
                .iter()
                .map(item_text)
                .filter(|line| !line.is_empty())
                .collect();
            if !lines.is_empty() {
                out.push(lines.join("\n"));
            }
        }
        Node::Blockquote { content } => {
            let mut inner = Vec::new();
            for child in content {
                collect_blocks(child, &mut inner);
            }
            if !inner.is_empty() {
                out.push(inner.join("\n"));
            }
        }
        Node::CodeBlock { content, .. } => {
            let code = runs_text(content);
            if !code.is_empty() {
                out.push(code);
            }
        }
        Node::Table { content } => {
            let rows: Vec<String> = content
                .iter()
                .filter_map(|row| match row {
                    Node::TableRow { content } => {
                        let cells: Vec<String> =
                            content.iter().map(cell_text).collect();
                        Some(cells.join(" ").trim().to_string())
                    }
                    _ => None,
                })
                .filter(|row| !row.is_empty())
                .collect();
            if !rows.is_empty() {
                out.push(rows.join("\n"));
            }
        }
        // Rules are pure markup; items and cells are reached via their
        // containers; bare runs cannot appear at block level.
        Node::HorizontalRule
        | Node::ListItem { .. }
        | Node::TaskItem { .. }
        | Node::TableRow { .. }
        | Node::TableHeaderCell { .. }
        | Node::TableCell { .. }
        | Node::Text { .. } => {}
    }
}

fn item_text(item: &Node) -> String {
    match item {
        Node::ListItem { content } | Node::TaskItem { content, .. } => paragraphs_text(content),
        _ => String::new(),
    }
}

fn cell_text(cell: &Node) -> String {
    match cell {
        Node::TableHeaderCell { content, .. } | Node::TableCell { content, .. } => {
            paragraphs_text(content)
        }
        _ => String::new(),
    }
}

fn paragraphs_text(content: &[Node]) -> String {
    content
        .iter()
        .filter_map(|child| match child {
            Node::Paragraph { content } => Some(runs_text(content)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn runs_text(runs: &[Node]) -> String {
    runs.iter()
        .filter_map(|run| match run {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_paragraphs_round_through_unchanged() {
        assert_eq!(to_plain_text("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn soft_wrap_is_preserved() {
        assert_eq!(to_plain_text("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn heading_markers_are_stripped() {
        assert_eq!(to_plain_text("## Weekly Review"), "Weekly Review");
    }

    #[test]
    fn emphasis_and_code_markers_are_stripped() {
        assert_eq!(
            to_plain_text("**bold** and *em* and `code` and ~~gone~~"),
            "bold and em and code and gone"
        );
    }

    #[test]
    fn link_labels_survive() {
        assert_eq!(
            to_plain_text("see [docs](https://example.com) and [[My Page]]"),
            "see docs and My Page"
        );
    }

    #[test]
    fn quote_and_list_markers_are_stripped() {
        assert_eq!(to_plain_text("> quoted"), "quoted");
        assert_eq!(to_plain_text("- one\n- two"), "one\ntwo");
        assert_eq!(to_plain_text("- [x] done"), "done");
    }

    #[test]
    fn code_fences_drop_but_content_stays() {
        assert_eq!(to_plain_text("```rust\nlet x = 1;\n```"), "let x = 1;");
    }

    #[test]
    fn horizontal_rules_disappear() {
        assert_eq!(to_plain_text("a\n\n---\n\nb"), "a\n\nb");
    }

    #[test]
    fn table_cells_flatten_to_rows() {
        assert_eq!(
            to_plain_text("| a | b |\n| --- | --- |\n| c | d |"),
            "a b\nc d"
        );
    }

    #[test]
    fn empty_input_yields_empty_text() {
        assert_eq!(to_plain_text(""), "");
    }

    #[test]
    fn no_markup_characters_survive_a_marked_up_document() {
        let text = to_plain_text(
            "# H\n\n**b** _i_ `c`\n\n> q\n\n- item\n\n---\n\n[[Page]]",
        );
        for ch in ['#', '*', '_', '`', '>', '['] {
            assert!(!text.contains(ch), "unexpected {ch:?} in {text:?}");
        }
    }
}
