use std::mem;

use crate::{
    blockkit::{Block, RichTextElement},
    options::ConvertOptions,
    tree::{BlockNode, Document},
};

use super::{flowable, table::build_table};

/// Turns a [`Document`] into message blocks.
///
/// The assembler only holds configuration. All traversal state lives in a
/// per-call [`Assembly`], so one assembler can serve any number of
/// conversions, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct BlockAssembler {
    options: ConvertOptions,
}

/// Traversal state for one build call.
#[derive(Debug, Default)]
struct Assembly {
    /// Flowable elements waiting to be wrapped in a rich text block.
    pending: Vec<RichTextElement>,
    /// Blocks of the group being filled.
    group: Vec<Block>,
    /// Closed groups, in order.
    groups: Vec<Vec<Block>>,
    tables_in_group: usize,
    emitted_content: bool,
}

impl Assembly {
    /// Wraps pending flowable elements into one rich text block.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let elements = mem::take(&mut self.pending);
        log::trace!("flushing rich text block with {} elements", elements.len());
        self.group.push(Block::RichText { elements });
    }

    fn push_block(&mut self, block: Block) {
        self.group.push(block);
        self.emitted_content = true;
    }

    fn push_flowable(&mut self, element: RichTextElement) {
        self.pending.push(element);
        self.emitted_content = true;
    }

    /// Closes the current group and starts an empty one.
    ///
    /// Pending content goes into the group being closed, so text that
    /// precedes a table stays with the previous table's group.
    fn split_group(&mut self) {
        self.flush();
        if !self.group.is_empty() {
            self.groups.push(mem::take(&mut self.group));
        }
        self.tables_in_group = 0;
        log::debug!("starting message group {}", self.groups.len() + 1);
    }
}

impl BlockAssembler {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Builds a single ordered block list.
    pub fn build(&self, doc: &Document) -> Vec<Block> {
        let mut state = Assembly::default();
        self.walk(doc, &mut state, false);
        state.flush();
        state.group
    }

    /// Builds message groups with at most one table each.
    ///
    /// A document without tables yields exactly one group; an empty
    /// document yields one empty group.
    pub fn build_groups(&self, doc: &Document) -> Vec<Vec<Block>> {
        let mut state = Assembly::default();
        self.walk(doc, &mut state, true);
        state.flush();
        if !state.group.is_empty() || state.groups.is_empty() {
            state.groups.push(mem::take(&mut state.group));
        }
        log::debug!(
            "assembled {} message groups from {} tables",
            state.groups.len(),
            doc.table_count()
        );
        state.groups
    }

    fn walk(&self, doc: &Document, state: &mut Assembly, split_tables: bool) {
        for node in &doc.blocks {
            match node {
                BlockNode::ThematicBreak => {
                    state.flush();
                    state.push_block(Block::Divider);
                }
                BlockNode::Table(table) => {
                    if split_tables && state.tables_in_group >= 1 {
                        state.split_group();
                    }
                    state.flush();
                    if let Some(block) = build_table(table, &self.options) {
                        state.push_block(block);
                        state.tables_in_group += 1;
                    }
                }
                BlockNode::Heading { level, children } => {
                    let element = flowable::heading(*level, children, !state.emitted_content);
                    state.push_flowable(element);
                }
                BlockNode::Paragraph { children } => {
                    state.push_flowable(flowable::paragraph(children))
                }
                BlockNode::Blockquote { children } => {
                    state.push_flowable(flowable::blockquote(children))
                }
                BlockNode::CodeBlock { content, .. } => {
                    state.push_flowable(flowable::code_block(content))
                }
                BlockNode::List(list) => state.push_flowable(flowable::list(list)),
            }
        }
    }
}
