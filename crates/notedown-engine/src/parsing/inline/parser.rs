use super::cursor::Cursor;
use super::kinds::{CodeSpan, Emphasis, MarkdownLink, Strike, WikiLink};
use crate::doc::{Mark, Node};

/// Parses inline content into ordered text runs with marks.
///
/// Total over arbitrary input: empty input produces an empty list, and an
/// unmatched delimiter character lands in the surrounding literal run.
/// Empty-text runs are never emitted.
pub fn parse_inline(s: &str) -> Vec<Node> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(runs) = try_parse_construct(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            out.extend(runs);
            text_start = cur.pos();
        } else {
            cur.bump();
        }
    }

    flush_text(&mut out, s, text_start, s.len());
    out
}

fn flush_text(out: &mut Vec<Node>, s: &str, start: usize, end: usize) {
    if end > start {
        out.push(Node::text(&s[start..end]));
    }
}

/// Tries each construct in precedence order at the current position.
fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<Vec<Node>> {
    if let Some(runs) = try_parse_strong(cur) {
        return Some(runs);
    }
    if let Some(runs) = try_parse_emphasis(cur) {
        return Some(runs);
    }
    if let Some(run) = try_parse_code_span(cur) {
        return Some(vec![run]);
    }
    if let Some(run) = try_parse_link(cur) {
        return Some(vec![run]);
    }
    if let Some(run) = try_parse_wikilink(cur) {
        return Some(vec![run]);
    }
    if let Some(run) = try_parse_strike(cur) {
        return Some(vec![run]);
    }
    None
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<Vec<Node>> {
    for delim in Emphasis::STRONG {
        if let Some(runs) = try_parse_nested(cur, delim, Mark::Bold) {
            return Some(runs);
        }
    }
    None
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Vec<Node>> {
    for delim in Emphasis::EM {
        let lead = delim.as_bytes()[0];
        // A doubled delimiter is a failed bold opener, never an italic one.
        if cur.peek() == Some(lead) && cur.byte_at(cur.pos() + 1) == Some(lead) {
            continue;
        }
        if let Some(runs) = try_parse_nested(cur, delim, Mark::Italic) {
            return Some(runs);
        }
    }
    None
}

/// Matches `<delim>inner<delim>`, parses the interior recursively, and
/// applies `mark` to every produced run (code runs keep their exclusive
/// mark). On failure the cursor is restored.
fn try_parse_nested(cur: &mut Cursor<'_>, delim: &str, mark: Mark) -> Option<Vec<Node>> {
    if !cur.starts_with(delim) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    let Some(close) = find_closer(cur, delim, inner_start) else {
        *cur = saved;
        return None;
    };
    if close == inner_start {
        // Empty interior (`****`): not a construct.
        *cur = saved;
        return None;
    }

    let inner = cur.slice(inner_start, close);
    cur.seek(close + delim.len());

    let mut runs = parse_inline(inner);
    for run in &mut runs {
        if let Node::Text { marks, .. } = run
            && !marks.contains(&Mark::Code)
        {
            marks.insert(0, mark.clone());
        }
    }
    Some(runs)
}

/// Finds the closing delimiter, skipping candidates that butt against
/// another delimiter character and therefore belong to a longer run —
/// that is what routes `***both***` through bold with an italic interior.
fn find_closer(cur: &Cursor<'_>, delim: &str, from: usize) -> Option<usize> {
    let lead = delim.as_bytes()[0];
    let mut from = from;
    loop {
        let at = cur.find_from(from, delim)?;
        let run_continues = cur.byte_at(at + delim.len()) == Some(lead);
        let run_precedes = delim.len() == 1 && at > from && cur.byte_at(at - 1) == Some(lead);
        if run_continues || run_precedes {
            from = at + 1;
            continue;
        }
        return Some(at);
    }
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Node> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    let inner_start = cur.pos();
    let Some(close) = cur.find(CodeSpan::DELIMITER) else {
        *cur = saved;
        return None;
    };
    if close == inner_start {
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, close);
    cur.seek(close + 1);
    Some(Node::text_with(inner, vec![Mark::Code]))
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Node> {
    if cur.peek() != Some(MarkdownLink::OPEN) {
        return None;
    }
    let label_start = cur.pos() + 1;
    let mut label_end = label_start;
    loop {
        match cur.byte_at(label_end) {
            Some(MarkdownLink::CLOSE) => break,
            // Brackets in the label (including a `[[` opener) disqualify
            // this rule; the wikilink rule gets its chance next.
            Some(MarkdownLink::OPEN) | None => return None,
            Some(_) => label_end += 1,
        }
    }
    if label_end == label_start {
        return None;
    }
    if cur.byte_at(label_end + 1) != Some(MarkdownLink::URL_OPEN) {
        return None;
    }
    let url_start = label_end + 2;
    let mut url_end = url_start;
    loop {
        match cur.byte_at(url_end) {
            Some(MarkdownLink::URL_CLOSE) => break,
            None => return None,
            Some(_) => url_end += 1,
        }
    }

    let label = cur.slice(label_start, label_end);
    let href = cur.slice(url_start, url_end).trim();
    cur.seek(url_end + 1);
    Some(Node::text_with(
        label,
        vec![Mark::link(href, MarkdownLink::TARGET)],
    ))
}

fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<Node> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(WikiLink::OPEN.len());
    let inner_start = cur.pos();
    let Some(close) = cur.find(WikiLink::CLOSE) else {
        *cur = saved;
        return None;
    };
    let inner = cur.slice(inner_start, close);
    let (target, label) = match inner.split_once(WikiLink::ALIAS) {
        Some((target, label)) => (target.trim(), label.trim()),
        None => (inner.trim(), ""),
    };
    if target.is_empty() {
        *cur = saved;
        return None;
    }
    cur.seek(close + WikiLink::CLOSE.len());

    let label = if label.is_empty() { target } else { label };
    Some(Node::text_with(
        label,
        vec![Mark::link(WikiLink::slug(target), WikiLink::TARGET)],
    ))
}

fn try_parse_strike(cur: &mut Cursor<'_>) -> Option<Node> {
    if !cur.starts_with(Strike::DELIMITER) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(Strike::DELIMITER.len());
    let inner_start = cur.pos();
    let Some(close) = cur.find(Strike::DELIMITER) else {
        *cur = saved;
        return None;
    };
    if close == inner_start {
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, close);
    cur.seek(close + Strike::DELIMITER.len());
    Some(Node::text_with(inner, vec![Mark::Strike]))
}
