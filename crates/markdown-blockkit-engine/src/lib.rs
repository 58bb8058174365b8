//! # markdown-blockkit-engine
//!
//! Converts lightweight Markdown into chat message blocks.
//!
//! The conversion runs in two stages:
//!
//! ```text
//! text → parsing::parse_document → tree::Document → assembling::BlockAssembler → Vec<blockkit::Block>
//! ```
//!
//! The parser covers a fixed, reduced grammar (headings, paragraphs, fenced
//! code, quotes, flat lists, pipe tables, thematic breaks and a handful of
//! inline spans) and never fails. The assembler packs flowable content into
//! rich text blocks, emits dividers and tables as their own blocks, and can
//! split the output into several messages so that each holds at most one
//! table.

pub mod assembling;
pub mod blockkit;
pub mod convert;
pub mod error;
pub mod options;
pub mod parsing;
pub mod tree;

pub use assembling::BlockAssembler;
pub use blockkit::{Block, InlineElement, RichTextElement, TextStyle};
pub use convert::{
    Conversion, MarkdownConverter, blocks_to_value, convert_with_warnings, markdown_to_block_groups,
    markdown_to_blocks, markdown_to_json,
};
pub use error::ConvertError;
pub use options::ConvertOptions;
pub use parsing::parse_document;
pub use tree::Document;
