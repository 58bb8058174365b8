pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::tree::Document;

use blocks::BlockParser;

/// Parses lightweight markup into a [`Document`] tree.
///
/// Never fails: unrecognised input becomes paragraphs.
pub fn parse_document(text: &str) -> Document {
    let blocks = BlockParser::new(text).finish();
    log::trace!("parsed {} top-level blocks", blocks.len());
    Document { blocks }
}
