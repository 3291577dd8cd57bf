use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, TableRow, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder decides what the
/// classification means given what is already open.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    Blank,
    /// A fence delimiter with its info string (empty on closers).
    Fence { info: &'a str },
    Heading { level: u8, text: &'a str },
    Rule,
    Quote { text: &'a str },
    Task { checked: bool, text: &'a str },
    Bullet { text: &'a str },
    Ordered { text: &'a str },
    TableRow { row: &'a str },
    Text { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
///
/// Patterns are tried in fixed priority; the first match wins. Task items
/// are tried before bullets so the box is not swallowed as item text, and
/// rules before bullets so `***` is never a one-item list.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(info) = CodeFence::sig(line) {
            return LineKind::Fence { info };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineKind::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineKind::Rule;
        }
        if let Some(text) = BlockQuote::strip(line) {
            return LineKind::Quote { text };
        }
        if let Some((checked, text)) = ListMarker::task(line) {
            return LineKind::Task { checked, text };
        }
        if let Some(text) = ListMarker::bullet(line) {
            return LineKind::Bullet { text };
        }
        if let Some(text) = ListMarker::ordered(line) {
            return LineKind::Ordered { text };
        }
        if TableRow::matches(line) {
            return LineKind::TableRow { row: line.trim() };
        }
        LineKind::Text { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("   ", LineKind::Blank)]
    #[case("```rust", LineKind::Fence { info: "rust" })]
    #[case("```", LineKind::Fence { info: "" })]
    #[case("# Title", LineKind::Heading { level: 1, text: "Title" })]
    #[case("### Sub", LineKind::Heading { level: 3, text: "Sub" })]
    #[case("---", LineKind::Rule)]
    #[case("***", LineKind::Rule)]
    #[case("> quoted", LineKind::Quote { text: "quoted" })]
    #[case("- [ ] open", LineKind::Task { checked: false, text: "open" })]
    #[case("- [x] closed", LineKind::Task { checked: true, text: "closed" })]
    #[case("- item", LineKind::Bullet { text: "item" })]
    #[case("* item", LineKind::Bullet { text: "item" })]
    #[case("2. second", LineKind::Ordered { text: "second" })]
    #[case("| a | b |", LineKind::TableRow { row: "| a | b |" })]
    #[case("plain prose", LineKind::Text { text: "plain prose" })]
    #[case("#hashtag", LineKind::Text { text: "#hashtag" })]
    #[case("####### seven", LineKind::Text { text: "####### seven" })]
    fn classify_lines(#[case] line: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(LineClassifier.classify(line), expected);
    }
}
