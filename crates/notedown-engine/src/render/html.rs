//! HTML projection for read-only rendering surfaces.
//!
//! Content is trusted (the user's own notes or assistant output headed to
//! a sandboxed surface); escaping is applied only inside code contexts,
//! where stray `<` and `&` would otherwise corrupt the markup.

use crate::doc::{Mark, Node};
use crate::parsing::convert;

/// Renders markdown as display HTML. Never fails: the tree builder
/// degrades malformed input, and every node kind has a rendering.
pub fn render_html(markdown: &str) -> String {
    render_node(&convert(markdown))
}

/// Serializes one node and its subtree.
pub fn render_node(node: &Node) -> String {
    match node {
        Node::Doc { content } => render_children(content),
        Node::Paragraph { content } => format!("<p>{}</p>", render_children(content)),
        Node::Heading { attrs, content } => {
            let level = attrs.level;
            format!("<h{level}>{}</h{level}>", render_children(content))
        }
        Node::BulletList { content } => format!("<ul>{}</ul>", render_children(content)),
        Node::OrderedList { content } => format!("<ol>{}</ol>", render_children(content)),
        Node::TaskList { content } => {
            format!("<ul data-type=\"taskList\">{}</ul>", render_children(content))
        }
        Node::ListItem { content } => format!("<li>{}</li>", render_item_body(content)),
        Node::TaskItem { attrs, content } => {
            let checked = if attrs.checked { " checked" } else { "" };
            format!(
                "<li><input type=\"checkbox\"{checked} disabled> {}</li>",
                render_item_body(content)
            )
        }
        Node::Table { content } => render_table(content),
        Node::TableRow { content } => format!("<tr>{}</tr>", render_children(content)),
        Node::TableHeaderCell { content, .. } => {
            format!("<th>{}</th>", render_item_body(content))
        }
        Node::TableCell { content, .. } => format!("<td>{}</td>", render_item_body(content)),
        Node::Blockquote { content } => {
            format!("<blockquote>{}</blockquote>", render_children(content))
        }
        Node::CodeBlock { attrs, content } => {
            let code = collect_text(content);
            format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                attrs.language,
                html_escape::encode_text(&code)
            )
        }
        Node::HorizontalRule => "<hr>".to_string(),
        Node::Text { text, marks } => render_text_run(text, marks),
    }
}

fn render_children(children: &[Node]) -> String {
    children.iter().map(render_node).collect()
}

/// List items and table cells hold a single paragraph wrapper; its runs
/// render inline without the `<p>` so `<li>`/`<th>`/`<td>` stay compact.
fn render_item_body(content: &[Node]) -> String {
    match content {
        [Node::Paragraph { content: runs }] => render_children(runs),
        _ => render_children(content),
    }
}

/// Rows with header cells group under `<thead>`, the rest under
/// `<tbody>`; both sections are omitted when empty.
fn render_table(rows: &[Node]) -> String {
    let (head, body): (Vec<&Node>, Vec<&Node>) = rows.iter().partition(|row| is_header_row(row));

    let mut html = String::from("<table>");
    if !head.is_empty() {
        html.push_str("<thead>");
        for row in head {
            html.push_str(&render_node(row));
        }
        html.push_str("</thead>");
    }
    if !body.is_empty() {
        html.push_str("<tbody>");
        for row in body {
            html.push_str(&render_node(row));
        }
        html.push_str("</tbody>");
    }
    html.push_str("</table>");
    html
}

fn is_header_row(row: &Node) -> bool {
    matches!(
        row,
        Node::TableRow { content }
            if content.first().is_some_and(|cell| matches!(cell, Node::TableHeaderCell { .. }))
    )
}

fn collect_text(runs: &[Node]) -> String {
    runs.iter()
        .filter_map(|run| match run {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// Wraps a run in its mark tags, first mark outermost, so the parser's
/// bold-before-italic ordering carries into the markup. Soft-wrapped
/// newlines inside a run become `<br>`.
fn render_text_run(text: &str, marks: &[Mark]) -> String {
    let mut html = if marks.contains(&Mark::Code) {
        format!("<code>{}</code>", html_escape::encode_text(text))
    } else {
        text.replace('\n', "<br>")
    };
    for mark in marks.iter().rev() {
        html = match mark {
            Mark::Bold => format!("<strong>{html}</strong>"),
            Mark::Italic => format!("<em>{html}</em>"),
            Mark::Strike => format!("<s>{html}</s>"),
            Mark::Link { attrs } => format!(
                "<a href=\"{}\" target=\"{}\">{html}</a>",
                attrs.href, attrs.target
            ),
            Mark::Code => html,
        };
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(render_html("# Hi"), "<h1>Hi</h1>");
    }

    #[test]
    fn soft_wrapped_paragraph_gets_line_breaks() {
        assert_eq!(render_html("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn separate_paragraphs_get_separate_tags() {
        assert_eq!(render_html("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn bold_wraps_outside_italic() {
        assert_eq!(
            render_html("***x***"),
            "<p><strong><em>x</em></strong></p>"
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(render_html("~~old~~"), "<p><s>old</s></p>");
    }

    #[test]
    fn code_block_contents_are_escaped() {
        assert_eq!(
            render_html("```\n<b>&\n```"),
            "<pre><code class=\"language-plaintext\">&lt;b&gt;&amp;</code></pre>"
        );
    }

    #[test]
    fn inline_code_is_escaped() {
        assert_eq!(
            render_html("`<tag>`"),
            "<p><code>&lt;tag&gt;</code></p>"
        );
    }

    #[test]
    fn prose_is_not_escaped() {
        assert_eq!(render_html("a < b"), "<p>a < b</p>");
    }

    #[test]
    fn bullet_and_ordered_lists() {
        assert_eq!(
            render_html("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(render_html("1. a"), "<ol><li>a</li></ol>");
    }

    #[test]
    fn task_list_renders_checkboxes() {
        assert_eq!(
            render_html("- [x] done\n- [ ] open"),
            "<ul data-type=\"taskList\">\
             <li><input type=\"checkbox\" checked disabled> done</li>\
             <li><input type=\"checkbox\" disabled> open</li>\
             </ul>"
        );
    }

    #[test]
    fn multi_line_quote_is_one_blockquote() {
        assert_eq!(
            render_html("> a\n> b"),
            "<blockquote><p>a<br>b</p></blockquote>"
        );
    }

    #[test]
    fn table_splits_head_and_body() {
        assert_eq!(
            render_html("| h |\n| - |\n| c |"),
            "<table>\
             <thead><tr><th>h</th></tr></thead>\
             <tbody><tr><td>c</td></tr></tbody>\
             </table>"
        );
    }

    #[test]
    fn links_and_wikilinks() {
        assert_eq!(
            render_html("[docs](https://example.com)"),
            "<p><a href=\"https://example.com\" target=\"_blank\">docs</a></p>"
        );
        assert_eq!(
            render_html("[[My Page]]"),
            "<p><a href=\"my-page\" target=\"_self\">My Page</a></p>"
        );
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(render_html("---"), "<hr>");
    }

    #[test]
    fn empty_input_still_renders_a_paragraph() {
        assert_eq!(render_html(""), "<p></p>");
    }

    #[test]
    fn never_panics_on_pathological_input() {
        let inputs = [
            "",
            "|||",
            "||||||",
            "```",
            "``````",
            "| a | b || c",
            "****____~~~~",
            "[[",
            "[]()",
            "> \n> \n```\n| x |",
        ];
        for input in inputs {
            let _ = render_html(input);
        }
        let deep = "*".repeat(400) + "x" + &"*".repeat(400);
        let _ = render_html(&deep);
    }
}
