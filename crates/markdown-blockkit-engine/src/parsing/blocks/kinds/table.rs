use std::sync::OnceLock;

use regex::Regex;

/// Pipe table syntax.
///
/// Escaped pipes are not supported: every `|` splits a cell.
pub struct TableSyntax;

impl TableSyntax {
    pub const PIPE: char = '|';

    fn separator_regex() -> &'static Regex {
        static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
        SEPARATOR_REGEX
            .get_or_init(|| Regex::new(r"^[\s|:\-]+$").expect("Invalid table separator regex"))
    }

    pub fn is_row(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// A header/body separator such as `|---|:--:|`.
    pub fn is_separator(line: &str) -> bool {
        Self::separator_regex().is_match(line.trim())
    }

    /// A table starts where a pipe row is directly followed by a separator.
    pub fn starts_at(line: &str, next: Option<&str>) -> bool {
        Self::is_row(line) && next.is_some_and(Self::is_separator)
    }

    /// Splits a row into trimmed cell texts, ignoring outer pipes.
    pub fn split_row(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }
}
