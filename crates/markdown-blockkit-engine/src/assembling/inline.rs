use crate::{
    blockkit::{InlineElement, TextStyle},
    tree::InlineNode,
};

/// Text placed in sections and cells that would otherwise be empty.
pub const EMPTY_PLACEHOLDER: &str = " ";

/// Line break element injected around top-level headings.
pub const LINE_BREAK: &str = "\n";

/// Renders inline nodes to output elements under an inherited style.
///
/// Formatting spans merge their flag into the style as recursion descends;
/// the merged style lands on the innermost text or link.
pub fn render_inline(nodes: &[InlineNode], style: TextStyle) -> Vec<InlineElement> {
    let mut out = vec![];
    push_inline(nodes, style, &mut out);
    out
}

/// Like [`render_inline`], but never returns an empty list.
pub fn render_inline_or_placeholder(nodes: &[InlineNode], style: TextStyle) -> Vec<InlineElement> {
    let elements = render_inline(nodes, style);
    if elements.is_empty() {
        vec![InlineElement::text(EMPTY_PLACEHOLDER)]
    } else {
        elements
    }
}

fn push_inline(nodes: &[InlineNode], style: TextStyle, out: &mut Vec<InlineElement>) {
    for node in nodes {
        match node {
            InlineNode::Text { content } => {
                if !content.is_empty() {
                    out.push(InlineElement::styled(content.as_str(), style));
                }
            }
            InlineNode::Strong { children } => {
                push_inline(children, style.merge(TextStyle::BOLD), out)
            }
            InlineNode::Emphasis { children } => {
                push_inline(children, style.merge(TextStyle::ITALIC), out)
            }
            InlineNode::Strikethrough { children } => {
                push_inline(children, style.merge(TextStyle::STRIKE), out)
            }
            InlineNode::InlineCode { content } => {
                out.push(InlineElement::styled(
                    content.as_str(),
                    style.merge(TextStyle::CODE),
                ));
            }
            InlineNode::Link { href, text } => out.push(InlineElement::Link {
                url: href.clone(),
                text: (text != href).then(|| text.clone()),
                style: style.non_empty(),
            }),
            InlineNode::Image { src, alt } => out.push(InlineElement::Link {
                url: src.clone(),
                text: (!alt.is_empty() && alt != src).then(|| alt.clone()),
                style: style.non_empty(),
            }),
        }
    }
}
