//! # notedown-engine
//!
//! Converts freeform markdown (typed, pasted, or returned by the AI
//! assistant) into the three projections the rest of the app consumes:
//!
//! - a typed document tree for the rich-text editor ([`convert`])
//! - sanitized display HTML for read-only surfaces ([`render_html`])
//! - a flat plain-text projection for search indexing ([`to_plain_text`])
//!
//! All three entry points are pure functions of their input string and
//! never fail: malformed input degrades to simpler structures instead of
//! raising. The document is parsed once; both renderers walk the same
//! tree, so every projection agrees on the grammar decisions.

pub mod doc;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use doc::{Mark, Node};
pub use parsing::convert;
pub use render::{render_html, to_plain_text};
