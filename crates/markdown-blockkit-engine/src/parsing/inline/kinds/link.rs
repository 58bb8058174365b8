/// `[text](url)`. Whitespace is allowed between `]` and `(`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// `![alt](src)`
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8] = b"![";
}

/// `<http://...>` or `<https://...>`
pub struct AutoLink;

impl AutoLink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const SCHEMES: [&'static str; 2] = ["http://", "https://"];

    /// A scheme followed by at least one more character.
    pub fn is_target(target: &str) -> bool {
        Self::SCHEMES
            .iter()
            .any(|scheme| target.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
    }
}
