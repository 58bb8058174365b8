//! Translation of flowable tree nodes into rich text elements.

use crate::{
    blockkit::{InlineElement, ListStyle, RichTextElement, TextStyle},
    tree::{InlineNode, List},
};

use super::inline::{LINE_BREAK, render_inline, render_inline_or_placeholder};

/// Headings up to this level are padded with line breaks.
pub const SPACED_HEADING_MAX_LEVEL: u8 = 2;

/// A heading section.
///
/// Level 1 and 2 headings get a trailing line break, and a leading one
/// unless nothing has been emitted before them.
pub fn heading(level: u8, children: &[InlineNode], first_content: bool) -> RichTextElement {
    let spaced = level <= SPACED_HEADING_MAX_LEVEL;
    let mut elements = vec![];
    if spaced && !first_content {
        elements.push(InlineElement::text(LINE_BREAK));
    }
    elements.extend(render_inline(children, TextStyle::default()));
    if spaced {
        elements.push(InlineElement::text(LINE_BREAK));
    }
    if elements.is_empty() {
        return paragraph(&[]);
    }
    RichTextElement::section(elements)
}

pub fn paragraph(children: &[InlineNode]) -> RichTextElement {
    RichTextElement::section(render_inline_or_placeholder(
        children,
        TextStyle::default(),
    ))
}

pub fn blockquote(children: &[InlineNode]) -> RichTextElement {
    RichTextElement::RichTextQuote {
        elements: render_inline_or_placeholder(children, TextStyle::default()),
    }
}

/// Raw, unstyled code text.
pub fn code_block(content: &str) -> RichTextElement {
    RichTextElement::RichTextPreformatted {
        elements: vec![InlineElement::text(content)],
    }
}

/// One section per item. Ordered lists starting above 1 carry an offset.
pub fn list(list: &List) -> RichTextElement {
    let style = if list.ordered {
        ListStyle::Ordered
    } else {
        ListStyle::Bullet
    };
    let offset = (list.ordered && list.start > 1).then(|| list.start - 1);
    RichTextElement::RichTextList {
        style,
        elements: list.items.iter().map(|item| paragraph(&item.children)).collect(),
        offset,
    }
}
