/// Standard markdown links `[label](url)`.
///
/// Labels may not contain brackets, which keeps `[[wikilink]]` syntax out
/// of this rule entirely.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// External links open in a new tab.
    pub const TARGET: &'static str = "_blank";
}
