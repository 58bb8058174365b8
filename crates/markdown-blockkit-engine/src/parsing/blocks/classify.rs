use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// Classification of a single line using only local facts.
///
/// Table detection needs the following line as well, so it is left to the
/// [`super::BlockParser`]; a line that could start a table is reported as
/// [`LineClass::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    /// Opening fence with its optional language tag.
    Fence { language: Option<String> },
    /// A line opening with `>`.
    Quote,
    /// A non-indented list item marker.
    ListItem(ListMarker<'a>),
    Text,
}

impl LineClass<'_> {
    /// Whether this line opens a construct that ends a running paragraph.
    pub fn interrupts_paragraph(&self) -> bool {
        !matches!(self, LineClass::Text)
    }
}

/// Classifies individual lines in block precedence order:
/// blank, heading, thematic break, fence, quote, list item, text.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if CodeFence::is_fence(line) {
            return LineClass::Fence {
                language: CodeFence::language(line),
            };
        }
        if BlockQuote::strip_prefix(line).is_some() {
            return LineClass::Quote;
        }
        if let Some(marker) = ListMarker::parse_opener(line) {
            return LineClass::ListItem(marker);
        }
        LineClass::Text
    }
}
