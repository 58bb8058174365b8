/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block opener matches. Consecutive lines are joined with `\n` and the
/// joined text is inline-parsed as one run.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_SEPARATOR: &'static str = "\n";
}
