use std::sync::OnceLock;

use regex::Regex;

/// A list item marker line: `-`, `*`, `+` bullets or `1.` / `1)` / `1]` numerals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Whether the marker line starts with whitespace.
    pub indented: bool,
    pub ordered: bool,
    /// The marker exactly as written, e.g. `-` or `2.`.
    pub marker: &'a str,
    /// Numeral of an ordered marker.
    pub number: Option<u64>,
    /// Item text after the marker.
    pub content: &'a str,
}

fn bullet_regex() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX
        .get_or_init(|| Regex::new(r"^(\s*)([*+-])\s+(.*)$").expect("Invalid bullet regex"))
}

fn ordered_regex() -> &'static Regex {
    static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDERED_REGEX.get_or_init(|| {
        Regex::new(r"^(\s*)((\d+)[.)\]])\s+(.*)$").expect("Invalid ordered list regex")
    })
}

impl<'a> ListMarker<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        if let Some(caps) = bullet_regex().captures(line) {
            return Some(ListMarker {
                indented: !caps.get(1)?.as_str().is_empty(),
                ordered: false,
                marker: caps.get(2)?.as_str(),
                number: None,
                content: caps.get(3)?.as_str(),
            });
        }

        let caps = ordered_regex().captures(line)?;
        Some(ListMarker {
            indented: !caps.get(1)?.as_str().is_empty(),
            ordered: true,
            marker: caps.get(2)?.as_str(),
            number: caps.get(3)?.as_str().parse().ok(),
            content: caps.get(4)?.as_str(),
        })
    }

    /// A marker line that can open a list (not indented).
    pub fn parse_opener(line: &'a str) -> Option<Self> {
        Self::parse(line).filter(|m| !m.indented)
    }
}

/// Whether a line starts with indentation.
pub fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}
