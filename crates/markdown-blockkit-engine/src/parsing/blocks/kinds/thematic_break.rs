/// Thematic break (`---`, `***`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    /// A trimmed line made solely of at least three copies of one break char.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && t.len() >= Self::MIN_LEN
            && t.chars().all(|c| c == first)
    }
}
