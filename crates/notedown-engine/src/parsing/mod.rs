//! # Block Parsing
//!
//! Two-phase conversion of markdown into the document tree.
//!
//! 1. **Line classification** (`classify`): each line is classified
//!    independently into a [`LineKind`] containing only local facts, with
//!    per-construct pattern knowledge owned by the `kinds` modules.
//! 2. **Assembly** (`builder`): a [`DocBuilder`] consumes the classified
//!    lines in one pass, accumulating multi-line constructs and emitting
//!    block nodes as they close.
//!
//! Fenced code blocks are raw zones: while a fence is open, lines are
//! buffered verbatim regardless of classification. Table candidates are
//! collected contiguously (blank lines tolerated when another row
//! follows) and handed to the `table` decoder as one unit.

pub mod builder;
pub mod classify;
pub mod inline;
pub mod kinds;
pub mod table;

pub use builder::DocBuilder;
pub use classify::{LineClassifier, LineKind};
pub use inline::parse_inline;

use crate::doc::Node;

/// Converts markdown into the editor's document tree.
///
/// Total over arbitrary input; malformed constructs degrade to simpler
/// structures rather than failing. The tree is built fresh on every call.
pub fn convert(markdown: &str) -> Node {
    let classifier = LineClassifier;
    let mut builder = DocBuilder::new();

    for line in markdown.lines() {
        builder.push(line, classifier.classify(line));
    }

    Node::Doc {
        content: builder.finish(),
    }
}
