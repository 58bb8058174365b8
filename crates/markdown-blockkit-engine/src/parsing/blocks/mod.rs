//! # Block Parsing
//!
//! Line-oriented block parsing in two cooperating parts.
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (heading, break, fence, quote, list
//!    marker, blank, or plain text)
//!
//! 2. **Block Construction** (`builder`): a `BlockParser` walks the lines
//!    once with a single position index, looks one line ahead for tables,
//!    and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockParser` consuming lines into block nodes
//!
//! ## Key Invariants
//!
//! - Every line is assigned to exactly one construct; paragraph is the fallback
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Indented list items are flattened into their parent item as text

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockParser;
pub use classify::{LineClass, MarkdownLineClassifier};
