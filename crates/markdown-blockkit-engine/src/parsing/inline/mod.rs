//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single captured text run (a heading's
//! text, a joined paragraph, a quote, a list item or a table cell).
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Code spans are tried first and suppress everything inside them:
//! `` `**not bold**` `` parses as a single code span.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
