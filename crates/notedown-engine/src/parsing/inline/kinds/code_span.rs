/// Inline code, delimited by single backticks.
///
/// Code spans are raw zones: the inner text is never re-scanned for other
/// marks, and the `code` mark excludes all others on the run.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
    pub const DELIMITER: &'static str = "`";
}
