/// A cursor for byte-by-byte inline parsing.
///
/// All delimiters recognised by the inline grammar are ASCII, so every
/// position where a construct starts or ends is a valid char boundary even
/// when the cursor steps through multi-byte characters one byte at a time.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Finds the next occurrence of `pat` at or after the cursor, without
    /// crossing a newline. Returns its byte index.
    pub fn find_on_line(&self, pat: &[u8]) -> Option<usize> {
        let bytes = self.s.as_bytes();
        let mut j = self.i;
        while j < bytes.len() {
            if bytes[j..].starts_with(pat) {
                return Some(j);
            }
            if bytes[j] == b'\n' {
                return None;
            }
            j += 1;
        }
        None
    }

    /// Slice of the source between two byte indices.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
