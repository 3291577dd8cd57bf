//! Inline constructs with owned delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strike;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::MarkdownLink;
pub use strike::Strike;
pub use wikilink::WikiLink;
