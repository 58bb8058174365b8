/// A symmetric formatting span such as `**strong**` or `~~strike~~`.
///
/// The captured inner text is parsed again, so spans nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Strong,
    EmphasisUnderscore,
    EmphasisAsterisk,
    Strikethrough,
}

impl Delimited {
    /// Precedence order in which the parser tries the spans.
    pub const ORDER: [Delimited; 4] = [
        Delimited::Strong,
        Delimited::EmphasisUnderscore,
        Delimited::EmphasisAsterisk,
        Delimited::Strikethrough,
    ];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Delimited::Strong => b"**",
            Delimited::EmphasisUnderscore => b"_",
            Delimited::EmphasisAsterisk => b"*",
            Delimited::Strikethrough => b"~~",
        }
    }
}
