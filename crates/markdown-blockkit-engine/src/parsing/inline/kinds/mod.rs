//! Inline-specific types with owned delimiters.
//!
//! Each construct keeps its syntax knowledge here rather than in the parser loop.

pub mod code_span;
pub mod delimited;
pub mod link;

pub use code_span::CodeSpan;
pub use delimited::Delimited;
pub use link::{AutoLink, Image, Link};
