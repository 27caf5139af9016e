//! Minimal markdown model for assistant text blocks.
//!
//! Supports paragraphs, flat `-`/`*` lists, and the inline forms `**bold**`,
//! `*italic*`, `` `code` `` and `[text](url)`. No nesting, no raw HTML: the
//! output is a typed tree the message view renders node by node.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdBlock {
    Paragraph(Vec<MdInline>),
    List(Vec<Vec<MdInline>>),
}

/// Inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdInline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, href: String },
}

/// Parse `text` into blocks. Blank paragraphs are dropped.
#[must_use]
pub fn parse_markdown(text: &str) -> Vec<MdBlock> {
    split_paragraphs(text)
        .into_iter()
        .map(|para| {
            if para.lines().all(is_list_line) {
                MdBlock::List(
                    para.lines()
                        .filter(|line| !line.trim().is_empty())
                        .map(|line| parse_inline(strip_bullet(line)))
                        .collect(),
                )
            } else {
                MdBlock::Paragraph(parse_inline(&para.replace('\n', " ")))
            }
        })
        .collect()
}

/// Paragraphs are separated by two or more consecutive newlines.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for piece in text.split('\n') {
        if piece.is_empty() {
            flush(&mut current, &mut out);
        } else {
            current.push(piece);
        }
    }
    flush(&mut current, &mut out);
    out
}

fn flush(current: &mut Vec<&str>, out: &mut Vec<String>) {
    let joined = current.join("\n");
    current.clear();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
}

fn is_list_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }
    let mut chars = line.trim_start().chars();
    matches!(chars.next(), Some('-' | '*')) && chars.next().is_some_and(char::is_whitespace)
}

fn strip_bullet(line: &str) -> &str {
    let rest = line.trim_start();
    rest.get(1..).unwrap_or_default().trim_start()
}

/// Single left-to-right scan. At each position try bold, italic, code, then
/// link; the first form that closes wins and text resumes after it.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<MdInline> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < text.len() {
        if let Some((node, end)) = match_at(text, i) {
            if plain_start < i {
                out.push(MdInline::Text(text[plain_start..i].to_owned()));
            }
            out.push(node);
            i = end;
            plain_start = end;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        out.push(MdInline::Text(text[plain_start..].to_owned()));
    }
    out
}

fn match_at(text: &str, i: usize) -> Option<(MdInline, usize)> {
    let rest = &text[i..];
    if rest.starts_with("**") {
        if let Some((inner, end)) = delimited(text, i, 2, "**") {
            return Some((MdInline::Bold(inner.to_owned()), end));
        }
    }
    if rest.starts_with('*') {
        if let Some((inner, end)) = delimited(text, i, 1, "*") {
            return Some((MdInline::Italic(inner.to_owned()), end));
        }
    }
    if rest.starts_with('`') {
        if let Some((inner, end)) = delimited(text, i, 1, "`") {
            return Some((MdInline::Code(inner.to_owned()), end));
        }
    }
    if rest.starts_with('[') {
        return link(text, i);
    }
    None
}

/// Shortest non-empty content between an opener of `open_len` bytes at `i`
/// and the next `close`. Returns the content and the index past the closer.
fn delimited<'a>(text: &'a str, i: usize, open_len: usize, close: &str) -> Option<(&'a str, usize)> {
    let content_start = i + open_len;
    let first_char = text[content_start..].chars().next()?;
    let search_from = content_start + first_char.len_utf8();
    let close_at = search_from + text[search_from..].find(close)?;
    Some((&text[content_start..close_at], close_at + close.len()))
}

fn link(text: &str, i: usize) -> Option<(MdInline, usize)> {
    let label_start = i + 1;
    let first_char = text[label_start..].chars().next()?;
    let mut search_from = label_start + first_char.len_utf8();
    // The label may itself contain "](" when no URL closes after an earlier one.
    while let Some(offset) = text[search_from..].find("](") {
        let label_end = search_from + offset;
        let href_start = label_end + 2;
        if let Some(href_char) = text[href_start..].chars().next() {
            let after_first = href_start + href_char.len_utf8();
            if let Some(close) = text[after_first..].find(')') {
                let href_end = after_first + close;
                return Some((
                    MdInline::Link {
                        text: text[label_start..label_end].to_owned(),
                        href: text[href_start..href_end].to_owned(),
                    },
                    href_end + 1,
                ));
            }
        }
        search_from = label_end + 1;
    }
    None
}
