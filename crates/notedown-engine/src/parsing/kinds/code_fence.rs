/// Fenced code blocks, delimited by three backticks.
///
/// Fences are raw zones: nothing inside them is classified or
/// inline-parsed. The same signature opens and closes a fence.
pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Returns the info string when the line is a fence delimiter.
    pub fn sig(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::DELIMITER).map(str::trim)
    }

    /// Language named by an opening fence's info string.
    pub fn language(info: &str) -> &str {
        info.split_whitespace().next().unwrap_or(Self::DEFAULT_LANGUAGE)
    }
}
