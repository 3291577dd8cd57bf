/// List item markers: bullets (`-`, `*`, `+`), ordered (`1.`), and task
/// boxes (`- [ ]` / `- [x]`).
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// `- text` → `"text"`. The marker must be followed by whitespace.
    pub fn bullet(line: &str) -> Option<&str> {
        let t = line.trim();
        let mut chars = t.chars();
        if !Self::BULLETS.contains(&chars.next()?) {
            return None;
        }
        let rest = chars.as_str();
        let rest = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\t'))?;
        Some(rest.trim_start())
    }

    /// `- [x] text` → `(true, "text")`. Only ` `, `x` and `X` are valid
    /// box states.
    pub fn task(line: &str) -> Option<(bool, &str)> {
        let rest = Self::bullet(line)?;
        let (checked, rest) = if let Some(r) = rest.strip_prefix("[ ]") {
            (false, r)
        } else if let Some(r) = rest.strip_prefix("[x]").or_else(|| rest.strip_prefix("[X]")) {
            (true, r)
        } else {
            return None;
        };
        Some((checked, rest.trim_start()))
    }

    /// `3. text` → `"text"`. Any digit run followed by `.` and whitespace.
    pub fn ordered(line: &str) -> Option<&str> {
        let t = line.trim();
        let digits = t.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let rest = t[digits..].strip_prefix('.')?;
        let rest = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\t'))?;
        Some(rest.trim_start())
    }
}
