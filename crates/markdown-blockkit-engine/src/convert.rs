//! Convenience entry points tying the parser and the assembler together,
//! plus the advisory warnings layer.

use serde::Serialize;

use crate::{
    assembling::BlockAssembler,
    blockkit::{Block, RichTextElement},
    error::ConvertError,
    options::ConvertOptions,
    parsing::parse_document,
    tree::{BlockNode, Document, plain_text},
};

/// Soft limit on the number of blocks in one message.
pub const MAX_BLOCKS_PER_MESSAGE: usize = 50;

/// Blocks plus human-readable advisory warnings about them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub blocks: Vec<Block>,
    pub warnings: Vec<String>,
}

pub fn markdown_to_blocks(text: &str, options: &ConvertOptions) -> Vec<Block> {
    BlockAssembler::new(*options).build(&parse_document(text))
}

/// Splits the output into groups holding at most one table each.
pub fn markdown_to_block_groups(text: &str, options: &ConvertOptions) -> Vec<Vec<Block>> {
    BlockAssembler::new(*options).build_groups(&parse_document(text))
}

pub fn blocks_to_value(blocks: &[Block]) -> Result<serde_json::Value, ConvertError> {
    Ok(serde_json::to_value(blocks)?)
}

/// Converts and encodes the blocks as a compact JSON array.
pub fn markdown_to_json(text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    Ok(serde_json::to_string(&markdown_to_blocks(text, options))?)
}

/// Converts and reports limit problems without altering the blocks.
pub fn convert_with_warnings(text: &str, options: &ConvertOptions) -> Conversion {
    let doc = parse_document(text);
    let blocks = BlockAssembler::new(*options).build(&doc);
    let warnings = collect_warnings(&doc, &blocks, options);
    for warning in &warnings {
        log::debug!("conversion warning: {warning}");
    }
    Conversion { blocks, warnings }
}

fn collect_warnings(doc: &Document, blocks: &[Block], options: &ConvertOptions) -> Vec<String> {
    let mut warnings = vec![];

    if blocks.len() > MAX_BLOCKS_PER_MESSAGE {
        warnings.push(format!(
            "Output has {} blocks, more than the {MAX_BLOCKS_PER_MESSAGE} blocks allowed in one message",
            blocks.len()
        ));
    }

    let tables = blocks.iter().filter(|b| b.is_table()).count();
    if tables > 0 {
        warnings.push(format!(
            "Output contains {tables} table block(s); tables are not rendered by every client"
        ));
    }

    for node in &doc.blocks {
        if let BlockNode::Heading { children, .. } = node {
            let len = plain_text(children).chars().count();
            if len > options.max_header_length {
                warnings.push(format!(
                    "Heading is {len} characters long, over max_header_length ({})",
                    options.max_header_length
                ));
            }
        }
    }

    for block in blocks {
        if let Block::RichText { elements } = block {
            for element in elements {
                check_section_length(element, options, &mut warnings);
            }
        }
    }

    warnings
}

fn check_section_length(
    element: &RichTextElement,
    options: &ConvertOptions,
    warnings: &mut Vec<String>,
) {
    if let RichTextElement::RichTextList { elements, .. } = element {
        for item in elements {
            check_section_length(item, options, warnings);
        }
        return;
    }
    let len: usize = element
        .inline_elements()
        .iter()
        .map(|el| el.visible_text().chars().count())
        .sum();
    if len > options.max_section_length {
        warnings.push(format!(
            "Section is {len} characters long, over max_section_length ({})",
            options.max_section_length
        ));
    }
}

/// Reusable converter holding a configuration snapshot.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    assembler: BlockAssembler,
}

impl MarkdownConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            assembler: BlockAssembler::new(options),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        self.assembler.options()
    }

    pub fn convert(&self, text: &str) -> Vec<Block> {
        self.assembler.build(&parse_document(text))
    }

    pub fn convert_groups(&self, text: &str) -> Vec<Vec<Block>> {
        self.assembler.build_groups(&parse_document(text))
    }

    pub fn convert_with_warnings(&self, text: &str) -> Conversion {
        convert_with_warnings(text, self.options())
    }

    pub fn to_json(&self, text: &str) -> Result<String, ConvertError> {
        Ok(serde_json::to_string(&self.convert(text))?)
    }
}
