//! # Inline Parsing
//!
//! Cursor-based recursive descent over one logical line or paragraph.
//!
//! Each delimiter rule is a guarded `try_parse_*` function that either
//! consumes a whole construct or restores the cursor and lets the next
//! rule try. Rules run in fixed precedence:
//!
//! 1. bold (`**` / `__`)
//! 2. italic (`*` / `_`, refused when the delimiter is doubled)
//! 3. inline code (`` ` `` — a raw zone, never re-scanned)
//! 4. markdown link `[label](url)`
//! 5. wiki-link `[[target]]` / `[[target|label]]`
//! 6. strikethrough (`~~`)
//!
//! Bold and italic interiors are parsed recursively with the outer mark
//! applied to every produced run, which is what makes `***both***` come
//! out as a single run marked bold and italic. Anything unmatched is
//! emitted literally; the parser cannot fail.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
