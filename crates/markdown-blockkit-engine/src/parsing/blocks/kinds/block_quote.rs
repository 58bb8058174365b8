/// Blockquote block type with owned delimiter constant.
///
/// Quote lines are joined and inline-parsed as a single run; nested `>`
/// prefixes are not interpreted.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` marker and at most one following space.
    ///
    /// Returns `None` when the line is not a quote line. The marker must
    /// be in the first column.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
