//! The document tree handed to the rich-text editor.
//!
//! Nodes serialize to the editor's JSON vocabulary (`doc`, `paragraph`,
//! `bulletList`, `taskItem`, …) via the internally tagged `type` field, so
//! the tree can be passed to the editor component without a mapping layer.
//!
//! ## Invariants
//!
//! - Block containers hold block children; leaf containers hold text runs.
//! - List containers hold only their matching item type.
//! - Marks appear on text runs only; a `code` mark excludes all others on
//!   the same run.
//! - A tree is built fresh per conversion and never mutated afterwards.

use serde::Serialize;

/// A node in the document tree.
///
/// `horizontalRule` carries neither children nor text; `text` carries a
/// literal payload plus marks; every other variant carries children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Doc {
        content: Vec<Node>,
    },
    Paragraph {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    BulletList {
        content: Vec<Node>,
    },
    OrderedList {
        content: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    TaskList {
        content: Vec<Node>,
    },
    TaskItem {
        attrs: TaskItemAttrs,
        content: Vec<Node>,
    },
    Table {
        content: Vec<Node>,
    },
    TableRow {
        content: Vec<Node>,
    },
    TableHeaderCell {
        attrs: CellAttrs,
        content: Vec<Node>,
    },
    TableCell {
        attrs: CellAttrs,
        content: Vec<Node>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    CodeBlock {
        attrs: CodeBlockAttrs,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    HorizontalRule,
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
}

/// An inline formatting attribute on a text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Strike,
    Link { attrs: LinkAttrs },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskItemAttrs {
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

/// Merged cells are unsupported; every cell spans exactly one row and
/// column, but the editor schema requires the attributes to be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellAttrs {
    pub colspan: u32,
    pub rowspan: u32,
}

impl Default for CellAttrs {
    fn default() -> Self {
        Self {
            colspan: 1,
            rowspan: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAttrs {
    pub href: String,
    pub target: String,
}

impl Node {
    /// An unmarked text run.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text {
            text: text.into(),
            marks: vec![],
        }
    }

    /// A text run carrying the given marks.
    pub fn text_with(text: impl Into<String>, marks: Vec<Mark>) -> Node {
        Node::Text {
            text: text.into(),
            marks,
        }
    }

    /// A paragraph wrapping the given runs.
    pub fn paragraph(content: Vec<Node>) -> Node {
        Node::Paragraph { content }
    }

    /// A code block; empty code produces an empty run list rather than an
    /// empty text node.
    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Node {
        let code = code.into();
        let content = if code.is_empty() {
            vec![]
        } else {
            vec![Node::text(code)]
        };
        Node::CodeBlock {
            attrs: CodeBlockAttrs {
                language: language.into(),
            },
            content,
        }
    }
}

impl Mark {
    pub fn link(href: impl Into<String>, target: impl Into<String>) -> Mark {
        Mark::Link {
            attrs: LinkAttrs {
                href: href.into(),
                target: target.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_types_serialize_to_editor_vocabulary() {
        let doc = Node::Doc {
            content: vec![Node::Heading {
                attrs: HeadingAttrs { level: 2 },
                content: vec![Node::text("Title")],
            }],
        };

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "doc",
                "content": [{
                    "type": "heading",
                    "attrs": {"level": 2},
                    "content": [{"type": "text", "text": "Title"}]
                }]
            })
        );
    }

    #[test]
    fn marks_serialize_with_type_tags() {
        let run = Node::text_with("here", vec![Mark::Bold, Mark::link("a-page", "_self")]);

        assert_eq!(
            serde_json::to_value(&run).unwrap(),
            json!({
                "type": "text",
                "text": "here",
                "marks": [
                    {"type": "bold"},
                    {"type": "link", "attrs": {"href": "a-page", "target": "_self"}}
                ]
            })
        );
    }

    #[test]
    fn unmarked_run_omits_marks_entirely() {
        let value = serde_json::to_value(Node::text("plain")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "plain"}));
    }

    #[test]
    fn horizontal_rule_has_neither_content_nor_text() {
        let value = serde_json::to_value(Node::HorizontalRule).unwrap();
        assert_eq!(value, json!({"type": "horizontalRule"}));
    }

    #[test]
    fn empty_code_block_has_no_text_node() {
        let value = serde_json::to_value(Node::code_block("plaintext", "")).unwrap();
        assert_eq!(
            value,
            json!({"type": "codeBlock", "attrs": {"language": "plaintext"}})
        );
    }

    #[test]
    fn task_item_carries_checked_attr() {
        let item = Node::TaskItem {
            attrs: TaskItemAttrs { checked: true },
            content: vec![Node::paragraph(vec![Node::text("done")])],
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["attrs"]["checked"], json!(true));
    }

    #[test]
    fn cell_attrs_default_to_unit_span() {
        let attrs = CellAttrs::default();
        assert_eq!(attrs.colspan, 1);
        assert_eq!(attrs.rowspan, 1);
    }
}
