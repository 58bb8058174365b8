use crate::{
    parsing::inline::parse_inline,
    tree::{BlockNode, InlineNode, List, ListItem, Table, TableCell, TableRow},
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, ListMarker, Paragraph, TableSyntax, list::is_indented},
};

/// Single forward pass over the lines of a document.
///
/// Holds one buffered position index; table detection looks one line
/// ahead. Every line ends up in exactly one construct, with paragraph as
/// the fallback, so parsing never fails.
pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    classifier: MarkdownLineClassifier,
    out: Vec<BlockNode>,
}

impl<'a> BlockParser<'a> {
    /// Lines are split on `\n` only.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
            classifier: MarkdownLineClassifier,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        while let Some(line) = self.current() {
            match self.classifier.classify(line) {
                LineClass::Blank => self.pos += 1,
                LineClass::Heading { level, text } => {
                    self.out.push(BlockNode::Heading {
                        level,
                        children: parse_inline(text),
                    });
                    self.pos += 1;
                }
                LineClass::ThematicBreak => {
                    self.out.push(BlockNode::ThematicBreak);
                    self.pos += 1;
                }
                LineClass::Fence { language } => self.parse_code_block(language),
                LineClass::Quote => self.parse_blockquote(),
                LineClass::ListItem(marker) => self.parse_list(marker),
                LineClass::Text if self.table_starts_here() => self.parse_table(),
                LineClass::Text => self.parse_paragraph(),
            }
        }
        self.out
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn table_starts_here(&self) -> bool {
        match self.current() {
            Some(line) => TableSyntax::starts_at(line, self.lines.get(self.pos + 1).copied()),
            None => false,
        }
    }

    /// Consumes verbatim lines up to the closing fence or end of input.
    fn parse_code_block(&mut self, language: Option<String>) {
        self.pos += 1; // opening fence
        let mut body = vec![];
        while let Some(line) = self.current() {
            self.pos += 1;
            if CodeFence::is_fence(line) {
                break;
            }
            body.push(line);
        }
        self.out.push(BlockNode::CodeBlock {
            language,
            content: body.join("\n"),
        });
    }

    /// Joins consecutive quote lines into one inline run.
    fn parse_blockquote(&mut self) {
        let mut parts = vec![];
        while let Some(text) = self.current().and_then(BlockQuote::strip_prefix) {
            parts.push(text);
            self.pos += 1;
        }
        self.out.push(BlockNode::Blockquote {
            children: parse_inline(&parts.join("\n")),
        });
    }

    /// Consumes list items, flattening indented items and continuation
    /// lines into the preceding top-level item.
    fn parse_list(&mut self, first: ListMarker<'a>) {
        let ordered = first.ordered;
        let start = if ordered {
            first.number.unwrap_or(1)
        } else {
            1
        };
        let mut items = vec![ListItem {
            children: parse_inline(first.content),
        }];
        self.pos += 1;

        while let Some(line) = self.current() {
            match ListMarker::parse(line) {
                Some(marker) if marker.indented => {
                    if let Some(parent) = items.last_mut() {
                        parent
                            .children
                            .push(InlineNode::text(format!("\n{} ", marker.marker)));
                        parent.children.extend(parse_inline(marker.content));
                    }
                }
                Some(marker) => items.push(ListItem {
                    children: parse_inline(marker.content),
                }),
                None if is_indented(line) && !line.trim().is_empty() => {
                    if let Some(parent) = items.last_mut() {
                        parent
                            .children
                            .push(InlineNode::text(format!("\n{}", line.trim())));
                    }
                }
                None => break,
            }
            self.pos += 1;
        }

        self.out.push(BlockNode::List(List {
            ordered,
            start,
            items,
        }));
    }

    /// Header row, discarded separator, then pipe rows until a line without a pipe.
    fn parse_table(&mut self) {
        let mut rows = vec![];
        if let Some(header) = self.current() {
            rows.push(Self::table_row(header, true));
        }
        self.pos += 2; // header + separator

        while let Some(line) = self.current() {
            if !TableSyntax::is_row(line) {
                break;
            }
            rows.push(Self::table_row(line, false));
            self.pos += 1;
        }

        self.out.push(BlockNode::Table(Table { rows }));
    }

    fn table_row(line: &str, header: bool) -> TableRow {
        TableRow {
            cells: TableSyntax::split_row(line)
                .into_iter()
                .map(|cell| TableCell {
                    header,
                    children: parse_inline(cell),
                })
                .collect(),
        }
    }

    /// Consumes lines until a blank line or the start of another construct.
    fn parse_paragraph(&mut self) {
        let mut parts = vec![];
        while let Some(line) = self.current() {
            if !parts.is_empty()
                && (self.classifier.classify(line).interrupts_paragraph()
                    || self.table_starts_here())
            {
                break;
            }
            parts.push(line);
            self.pos += 1;
        }
        self.out.push(BlockNode::Paragraph {
            children: parse_inline(&parts.join(Paragraph::LINE_SEPARATOR)),
        });
    }
}
