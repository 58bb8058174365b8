/// Fenced code block syntax.
///
/// Fenced code blocks are raw zones: the lines between the fences are
/// kept verbatim and never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence line. Returns the info string after the fence
    /// (possibly empty) when the line opens or closes a fence.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Language tag of an opening fence, if one was given.
    pub fn language(line: &str) -> Option<String> {
        Self::sig(line)
            .filter(|info| !info.is_empty())
            .map(str::to_string)
    }

    pub fn is_fence(line: &str) -> bool {
        Self::sig(line).is_some()
    }
}
