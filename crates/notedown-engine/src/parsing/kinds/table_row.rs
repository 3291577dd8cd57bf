/// Pipe-delimited table rows.
///
/// Owns the separator-row heuristic and the cell split shared by the
/// decoder, plus the `||` join marker of the concatenated single-line row
/// layout produced by an upstream serialization quirk.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    pub const ROW_JOIN: &'static str = "||";

    /// A candidate row starts and ends with a pipe.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// Separator rows contain only pipes, dashes, colons and whitespace,
    /// with at least one dash.
    pub fn is_separator(row: &str) -> bool {
        row.contains('-')
            && row
                .chars()
                .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
    }

    /// Strips one outer pipe pair and splits the remainder into trimmed
    /// cells.
    pub fn split_cells(row: &str) -> Vec<&str> {
        let t = row.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_line_matches() {
        assert!(TableRow::matches("| a | b |"));
    }

    #[test]
    fn unpiped_line_does_not_match() {
        assert!(!TableRow::matches("a | b"));
        assert!(!TableRow::matches("plain text"));
    }

    #[test]
    fn separator_rows_with_alignment_colons() {
        assert!(TableRow::is_separator("| --- | --- |"));
        assert!(TableRow::is_separator("| :--- | ---: |"));
    }

    #[test]
    fn content_rows_are_not_separators() {
        assert!(!TableRow::is_separator("| a | b |"));
        assert!(!TableRow::is_separator("| | |"));
    }

    #[test]
    fn split_strips_outer_pipes_and_trims() {
        assert_eq!(TableRow::split_cells("| a | b c |"), vec!["a", "b c"]);
    }

    #[test]
    fn split_keeps_empty_cells() {
        assert_eq!(TableRow::split_cells("| a || b |"), vec!["a", "", "b"]);
    }
}
