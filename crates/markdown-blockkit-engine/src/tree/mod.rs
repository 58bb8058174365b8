//! # Document Tree
//!
//! The typed tree produced by [`crate::parsing::parse_document`] and consumed
//! by the [`crate::assembling::BlockAssembler`].
//!
//! The tree is split into two levels:
//!
//! - **`BlockNode`**: top-level constructs held by the [`Document`] root
//! - **`InlineNode`**: formatted runs inside headings, paragraphs, quotes,
//!   list items and table cells
//!
//! Block-level nesting never goes deeper than one level: list items, table
//! cells and blockquotes only hold inline children. Every node owns its
//! children; there are no back-references.

use serde::Serialize;

/// Root of a parsed document: a flat, ordered list of block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

impl Document {
    /// Number of table constructs at the top level.
    pub fn table_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, BlockNode::Table(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A top-level construct of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockNode {
    /// ATX heading (`#` through `######`).
    Heading {
        level: u8,
        children: Vec<InlineNode>,
    },
    Paragraph {
        children: Vec<InlineNode>,
    },
    /// Fenced code block. Content is raw text, never inline-parsed.
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    List(List),
    /// Consecutive `>` lines joined into a single inline run.
    Blockquote {
        children: Vec<InlineNode>,
    },
    Table(Table),
    ThematicBreak,
}

/// A bullet or ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    /// Numeral of the first item. Always 1 for bullet lists.
    pub start: u64,
    pub items: Vec<ListItem>,
}

/// A single list item.
///
/// Indented sub-items and continuation lines are flattened into the
/// children of the preceding top-level item as literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub children: Vec<InlineNode>,
}

/// A pipe table. The first row is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub header: bool,
    pub children: Vec<InlineNode>,
}

/// An inline run inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    Text { content: String },
    /// `**strong**`
    Strong { children: Vec<InlineNode> },
    /// `*emphasis*` or `_emphasis_`
    Emphasis { children: Vec<InlineNode> },
    /// `~~strikethrough~~`
    Strikethrough { children: Vec<InlineNode> },
    /// Single-backtick code span, kept verbatim.
    InlineCode { content: String },
    /// `[text](href)` or `<https://autolink>`. An empty text falls back to the href.
    Link { href: String, text: String },
    Image { src: String, alt: String },
}

impl InlineNode {
    pub fn text(content: impl Into<String>) -> Self {
        InlineNode::Text {
            content: content.into(),
        }
    }

    /// Concatenated visible text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { content } | InlineNode::InlineCode { content } => {
                out.push_str(content)
            }
            InlineNode::Strong { children }
            | InlineNode::Emphasis { children }
            | InlineNode::Strikethrough { children } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
            InlineNode::Link { text, .. } => out.push_str(text),
            InlineNode::Image { alt, .. } => out.push_str(alt),
        }
    }
}

/// Concatenated visible text of a run of inline nodes.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}
