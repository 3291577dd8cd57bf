/// ATX headings: one to six `#` markers, a space, then the heading text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// `## text` → `(2, "text")`. Lines without the separating space (or
    /// with more than six markers) are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let level = t.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        let rest = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\t'))?;
        Some((level as u8, rest.trim()))
    }
}
