use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#` followed by whitespace and text.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;

    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| {
                Regex::new(&format!(r"^(#{{1,{}}})\s+(.+)$", Self::MAX_LEVEL))
                    .expect("Invalid heading regex")
            })
    }

    /// Returns the heading level and its (trimmed) text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str().trim();
        Some((level, text))
    }
}
