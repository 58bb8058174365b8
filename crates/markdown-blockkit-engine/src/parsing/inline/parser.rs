use crate::tree::InlineNode;

use super::{
    cursor::Cursor,
    kinds::{AutoLink, CodeSpan, Delimited, Image, Link},
};

/// Parses an inline run into a sequence of [`InlineNode`]s.
///
/// At every position the rules are tried in a fixed order: code span,
/// strong, underscore emphasis, asterisk emphasis, strikethrough, link,
/// autolink and image. The first rule that
/// matches wins. Formatting spans parse their inner text recursively;
/// code spans, links and images keep their payload verbatim.
///
/// Text between constructs is emitted as `InlineNode::Text`. Unclosed
/// delimiters are never an error, they simply stay part of the text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::text(cur.slice(start, end)));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_construct(&mut cur) {
            flush_text(&mut out, &cur, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if let Some(node) = try_parse_code_span(cur) {
        return Some(node);
    }
    for kind in Delimited::ORDER {
        if let Some(node) = try_parse_delimited(cur, kind) {
            return Some(node);
        }
    }
    try_parse_link(cur)
        .or_else(|| try_parse_autolink(cur))
        .or_else(|| try_parse_image(cur))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it
/// isn't closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::InlineCode {
        content: cur.slice(inner_start, inner_end).to_string(),
    })
}

/// Attempts to parse a symmetric formatting span.
///
/// The inner text must be non-empty and must not cross a line; the first
/// closing delimiter after at least one inner character ends the span.
fn try_parse_delimited(cur: &mut Cursor<'_>, kind: Delimited) -> Option<InlineNode> {
    let delim = kind.delimiter();
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    if cur.eof() || cur.peek() == Some(b'\n') {
        *cur = saved;
        return None;
    }
    cur.bump(); // inner text is at least one byte

    let Some(inner_end) = cur.find_on_line(delim) else {
        *cur = saved;
        return None;
    };
    cur.i = inner_end + delim.len();

    let children = parse_inline(cur.slice(inner_start, inner_end));
    Some(match kind {
        Delimited::Strong => InlineNode::Strong { children },
        Delimited::EmphasisUnderscore | Delimited::EmphasisAsterisk => {
            InlineNode::Emphasis { children }
        }
        Delimited::Strikethrough => InlineNode::Strikethrough { children },
    })
}

/// Scans a `[...]` label starting at the cursor. Returns the label text and
/// leaves the cursor after the closing bracket.
fn scan_label<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    cur.bump();
    let start = cur.pos();
    while !cur.eof() && cur.peek() != Some(Link::TEXT_CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(Link::TEXT_CLOSE) {
        return None;
    }
    let end = cur.pos();
    cur.bump();
    Some(cur.slice(start, end))
}

/// Scans a non-empty `(...)` destination starting at the cursor.
fn scan_destination<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump();
    let start = cur.pos();
    while !cur.eof() && cur.peek() != Some(Link::URL_CLOSE) {
        cur.bump();
    }
    let end = cur.pos();
    if cur.peek() != Some(Link::URL_CLOSE) || end == start {
        return None;
    }
    cur.bump();
    Some(cur.slice(start, end))
}

/// Attempts to parse `[text](url)`. An empty text falls back to the url.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let saved = cur.clone();

    let parsed = scan_label(cur).and_then(|text| {
        while cur.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            cur.bump();
        }
        scan_destination(cur).map(|href| (text, href))
    });

    match parsed {
        Some((text, href)) => {
            let text = if text.is_empty() { href } else { text };
            Some(InlineNode::Link {
                href: href.to_string(),
                text: text.to_string(),
            })
        }
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `<http(s)://...>`. The url doubles as display text.
fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(AutoLink::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    let start = cur.pos();
    while !cur.eof() && cur.peek() != Some(AutoLink::CLOSE) {
        cur.bump();
    }
    let end = cur.pos();
    let target = cur.slice(start, end);

    if cur.peek() != Some(AutoLink::CLOSE) || !AutoLink::is_target(target) {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(InlineNode::Link {
        href: target.to_string(),
        text: target.to_string(),
    })
}

/// Attempts to parse `![alt](src)`. No whitespace is allowed before `(`.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !

    let parsed = scan_label(cur).and_then(|alt| scan_destination(cur).map(|src| (alt, src)));
    match parsed {
        Some((alt, src)) => Some(InlineNode::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineNode {
        InlineNode::text(s)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse_inline(""), vec![]);
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo **test**` now"),
            vec![
                text("run "),
                InlineNode::InlineCode {
                    content: "cargo **test**".into()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn strong_nests_emphasis() {
        assert_eq!(
            parse_inline("**bold _and italic_**"),
            vec![InlineNode::Strong {
                children: vec![
                    text("bold "),
                    InlineNode::Emphasis {
                        children: vec![text("and italic")]
                    },
                ]
            }]
        );
    }

    #[test]
    fn asterisk_emphasis_and_strikethrough() {
        assert_eq!(
            parse_inline("*a* ~~b~~"),
            vec![
                InlineNode::Emphasis {
                    children: vec![text("a")]
                },
                text(" "),
                InlineNode::Strikethrough {
                    children: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn link_with_whitespace_before_destination() {
        assert_eq!(
            parse_inline("see [docs] (https://example.com)"),
            vec![
                text("see "),
                InlineNode::Link {
                    href: "https://example.com".into(),
                    text: "docs".into()
                },
            ]
        );
    }

    #[test]
    fn empty_link_text_uses_url() {
        assert_eq!(
            parse_inline("[](https://x)"),
            vec![InlineNode::Link {
                href: "https://x".into(),
                text: "https://x".into()
            }]
        );
    }

    #[test]
    fn link_text_is_not_parsed() {
        assert_eq!(
            parse_inline("[**a**](u)"),
            vec![InlineNode::Link {
                href: "u".into(),
                text: "**a**".into()
            }]
        );
    }

    #[test]
    fn autolink() {
        assert_eq!(
            parse_inline("<https://rust-lang.org>"),
            vec![InlineNode::Link {
                href: "https://rust-lang.org".into(),
                text: "https://rust-lang.org".into()
            }]
        );
    }

    #[test]
    fn angle_brackets_without_scheme_stay_text() {
        assert_eq!(parse_inline("a <b> c"), vec![text("a <b> c")]);
        assert_eq!(parse_inline("<https://>"), vec![text("<https://>")]);
    }

    #[test]
    fn image() {
        assert_eq!(
            parse_inline("![logo](img.png)"),
            vec![InlineNode::Image {
                src: "img.png".into(),
                alt: "logo".into()
            }]
        );
    }

    #[test]
    fn unclosed_delimiters_become_text() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("`open"), vec![text("`open")]);
        assert_eq!(parse_inline("[text](open"), vec![text("[text](open")]);
    }

    #[test]
    fn formatting_does_not_cross_lines() {
        assert_eq!(parse_inline("**a\nb**"), vec![text("**a\nb**")]);
    }

    #[test]
    fn backslash_before_newline_stays_text() {
        assert_eq!(parse_inline("one\\\ntwo"), vec![text("one\\\ntwo")]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo **wörld** ✓"),
            vec![
                text("héllo "),
                InlineNode::Strong {
                    children: vec![text("wörld")]
                },
                text(" ✓"),
            ]
        );
    }
}
