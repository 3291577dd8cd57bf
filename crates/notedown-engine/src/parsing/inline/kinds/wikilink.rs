/// Wiki-style links `[[target]]` and `[[target|label]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';
    /// Wiki links navigate within the app.
    pub const TARGET: &'static str = "_self";

    /// Link target slug: lowercased, whitespace runs become hyphens.
    pub fn slug(target: &str) -> String {
        target
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}
