//! # Block Assembly
//!
//! Walks a parsed [`crate::tree::Document`] once and produces message blocks.
//!
//! Flowable content (headings, paragraphs, quotes, lists, code) accumulates
//! and is flushed into a single rich text block whenever an atomic block
//! (divider or table) is reached or the walk ends.
//!
//! ## Modules
//!
//! - **`assembler`**: `BlockAssembler` with single-group and multi-group builds
//! - **`flowable`**: per-node translation into rich text elements
//! - **`inline`**: inline rendering with style accumulation
//! - **`table`**: table blocks with row and column caps

pub mod assembler;
pub mod flowable;
pub mod inline;
pub mod table;

pub use assembler::BlockAssembler;
