use super::classify::LineKind;
use super::inline::parse_inline;
use super::kinds::CodeFence;
use super::table;
use crate::doc::{HeadingAttrs, Node, TaskItemAttrs};

/// Which list container is currently accumulating items.
///
/// Switching marker type flushes the open list and starts a sibling, so a
/// container never mixes item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
    Task,
}

#[derive(Debug)]
struct FenceState {
    language: String,
    lines: Vec<String>,
}

/// Single-pass block assembler.
///
/// Consumes one classified line at a time and accumulates the multi-line
/// constructs (fences, lists, quotes, tables, soft-wrapped paragraphs),
/// flushing each the moment a line of a different shape arrives. `finish`
/// flushes whatever is still open; an unterminated fence keeps its buffer
/// rather than discarding it.
pub struct DocBuilder {
    out: Vec<Node>,
    fence: Option<FenceState>,
    list: Option<(ListKind, Vec<Node>)>,
    quote: Vec<String>,
    table: Vec<String>,
    table_gap: bool,
    paragraph: Vec<String>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self {
            out: vec![],
            fence: None,
            list: None,
            quote: vec![],
            table: vec![],
            table_gap: false,
            paragraph: vec![],
        }
    }

    pub fn push(&mut self, raw: &str, kind: LineKind<'_>) {
        if self.fence.is_some() {
            self.consume_fence_line(raw, &kind);
            return;
        }

        match kind {
            LineKind::Blank => {
                // A blank inside a table candidate run is held back: the
                // table keeps growing if another row follows.
                if !self.table.is_empty() {
                    self.table_gap = true;
                    return;
                }
                self.flush_paragraph();
                self.flush_list();
                self.flush_quote();
            }
            LineKind::Fence { info } => {
                self.flush_all();
                self.fence = Some(FenceState {
                    language: CodeFence::language(info).to_string(),
                    lines: vec![],
                });
            }
            LineKind::Heading { level, text } => {
                self.flush_all();
                self.out.push(Node::Heading {
                    attrs: HeadingAttrs { level },
                    content: parse_inline(text),
                });
            }
            LineKind::Rule => {
                self.flush_all();
                self.out.push(Node::HorizontalRule);
            }
            LineKind::Quote { text } => {
                self.flush_paragraph();
                self.flush_list();
                self.flush_table();
                self.quote.push(text.to_string());
            }
            LineKind::Task { checked, text } => {
                self.flush_paragraph();
                self.flush_quote();
                self.flush_table();
                self.push_list_item(
                    ListKind::Task,
                    Node::TaskItem {
                        attrs: TaskItemAttrs { checked },
                        content: vec![Node::paragraph(parse_inline(text))],
                    },
                );
            }
            LineKind::Bullet { text } => {
                self.flush_paragraph();
                self.flush_quote();
                self.flush_table();
                self.push_list_item(
                    ListKind::Bullet,
                    Node::ListItem {
                        content: vec![Node::paragraph(parse_inline(text))],
                    },
                );
            }
            LineKind::Ordered { text } => {
                self.flush_paragraph();
                self.flush_quote();
                self.flush_table();
                self.push_list_item(
                    ListKind::Ordered,
                    Node::ListItem {
                        content: vec![Node::paragraph(parse_inline(text))],
                    },
                );
            }
            LineKind::TableRow { row } => {
                self.flush_paragraph();
                self.flush_list();
                self.flush_quote();
                self.table.push(row.to_string());
                self.table_gap = false;
            }
            LineKind::Text { text } => {
                self.flush_list();
                self.flush_quote();
                self.flush_table();
                self.paragraph.push(text.to_string());
            }
        }
    }

    /// EOF flush. An empty result still yields one empty paragraph so the
    /// editor has a tree to initialize from.
    pub fn finish(mut self) -> Vec<Node> {
        self.close_fence();
        self.flush_all();
        if self.out.is_empty() {
            self.out.push(Node::paragraph(vec![]));
        }
        self.out
    }

    fn consume_fence_line(&mut self, raw: &str, kind: &LineKind<'_>) {
        if matches!(kind, LineKind::Fence { .. }) {
            self.close_fence();
        } else if let Some(fence) = self.fence.as_mut() {
            fence.lines.push(raw.to_string());
        }
    }

    fn close_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            self.out
                .push(Node::code_block(fence.language, fence.lines.join("\n")));
        }
    }

    fn push_list_item(&mut self, kind: ListKind, item: Node) {
        match &mut self.list {
            Some((open, items)) if *open == kind => items.push(item),
            _ => {
                self.flush_list();
                self.list = Some((kind, vec![item]));
            }
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_list();
        self.flush_quote();
        self.flush_table();
    }

    fn flush_paragraph(&mut self) {
        let lines = std::mem::take(&mut self.paragraph);
        if !lines.is_empty() {
            // Soft wrap: the joined lines form one logical paragraph.
            self.out.push(Node::paragraph(parse_inline(&lines.join("\n"))));
        }
    }

    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            self.out.push(match kind {
                ListKind::Bullet => Node::BulletList { content: items },
                ListKind::Ordered => Node::OrderedList { content: items },
                ListKind::Task => Node::TaskList { content: items },
            });
        }
    }

    fn flush_quote(&mut self) {
        let lines = std::mem::take(&mut self.quote);
        if !lines.is_empty() {
            self.out.push(Node::Blockquote {
                content: vec![Node::paragraph(parse_inline(&lines.join("\n")))],
            });
        }
    }

    fn flush_table(&mut self) {
        let lines = std::mem::take(&mut self.table);
        self.table_gap = false;
        if lines.is_empty() {
            return;
        }
        match table::decode(&lines) {
            Some(node) => self.out.push(node),
            // Undecodable candidates degrade to a soft-wrapped paragraph.
            None => self
                .out
                .push(Node::paragraph(parse_inline(&lines.join("\n")))),
        }
    }
}

impl Default for DocBuilder {
    fn default() -> Self {
        Self::new()
    }
}
