//! # Block Kit Output Schema
//!
//! Serializable types for the three block kinds this crate emits: rich text
//! containers, dividers and tables. Field names and `type` tags follow the
//! chat platform's documented block schema, so `serde_json::to_value` on a
//! [`Block`] yields a payload the platform accepts as-is.

use serde::Serialize;

/// A top-level message block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Flowable container for sections, lists, quotes and preformatted text.
    RichText { elements: Vec<RichTextElement> },
    Divider,
    /// Row-major grid of cells. Rows may differ in length.
    Table {
        rows: Vec<Vec<TableCell>>,
        column_settings: Vec<ColumnSetting>,
    },
}

impl Block {
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table { .. })
    }
}

/// An element of a [`Block::RichText`] container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    RichTextSection {
        elements: Vec<InlineElement>,
    },
    /// Each element is a `RichTextSection`.
    RichTextList {
        style: ListStyle,
        elements: Vec<RichTextElement>,
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<u64>,
    },
    RichTextQuote {
        elements: Vec<InlineElement>,
    },
    RichTextPreformatted {
        elements: Vec<InlineElement>,
    },
}

impl RichTextElement {
    pub fn section(elements: Vec<InlineElement>) -> Self {
        RichTextElement::RichTextSection { elements }
    }

    /// Inline elements of this element, flattening list sections.
    pub fn inline_elements(&self) -> Vec<&InlineElement> {
        match self {
            RichTextElement::RichTextSection { elements }
            | RichTextElement::RichTextQuote { elements }
            | RichTextElement::RichTextPreformatted { elements } => elements.iter().collect(),
            RichTextElement::RichTextList { elements, .. } => elements
                .iter()
                .flat_map(RichTextElement::inline_elements)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Ordered,
}

/// A leaf run inside a rich text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
    Link {
        url: String,
        /// Present only when the display text differs from the url.
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
}

impl InlineElement {
    pub fn text(text: impl Into<String>) -> Self {
        InlineElement::Text {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        InlineElement::Text {
            text: text.into(),
            style: style.non_empty(),
        }
    }

    /// Visible text: the text of a run, or a link's label (falling back to its url).
    pub fn visible_text(&self) -> &str {
        match self {
            InlineElement::Text { text, .. } => text,
            InlineElement::Link { url, text, .. } => text.as_deref().unwrap_or(url),
        }
    }
}

/// Accumulated formatting flags. Only the set flags are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strike: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub code: bool,
}

impl TextStyle {
    pub const BOLD: TextStyle = TextStyle {
        bold: true,
        italic: false,
        strike: false,
        code: false,
    };
    pub const ITALIC: TextStyle = TextStyle {
        bold: false,
        italic: true,
        strike: false,
        code: false,
    };
    pub const STRIKE: TextStyle = TextStyle {
        bold: false,
        italic: false,
        strike: true,
        code: false,
    };
    pub const CODE: TextStyle = TextStyle {
        bold: false,
        italic: false,
        strike: false,
        code: true,
    };

    /// Union of two styles; a flag set in either stays set.
    pub fn merge(self, other: TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            strike: self.strike || other.strike,
            code: self.code || other.code,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.strike || self.code)
    }

    /// `None` for a style with no flags set.
    pub fn non_empty(self) -> Option<TextStyle> {
        (!self.is_empty()).then_some(self)
    }
}

/// A table cell: a one-section rich text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "rich_text")]
pub struct TableCell {
    pub elements: Vec<RichTextElement>,
}

impl TableCell {
    pub fn from_inline(elements: Vec<InlineElement>) -> Self {
        TableCell {
            elements: vec![RichTextElement::section(elements)],
        }
    }
}

/// Per-column display setting of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSetting {
    pub is_wrapped: bool,
}

impl Default for ColumnSetting {
    fn default() -> Self {
        ColumnSetting { is_wrapped: true }
    }
}
