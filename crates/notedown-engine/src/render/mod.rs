//! # Projections
//!
//! Both renderers walk the tree produced by [`crate::parsing::convert`]
//! rather than re-detecting constructs in the raw text, so the grammar is
//! decided exactly once and every projection agrees with the editor view.

pub mod html;
pub mod plain;

pub use html::render_html;
pub use plain::to_plain_text;
