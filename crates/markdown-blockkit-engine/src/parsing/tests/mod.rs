//! Document-level tests for the parsing module.
//!
//! Each test feeds a complete document through [`parse_document`] and checks
//! the resulting tree.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::parse_document;
use crate::tree::{BlockNode, InlineNode, List, ListItem, Table, TableCell, TableRow};

fn text(s: &str) -> InlineNode {
    InlineNode::text(s)
}

fn cell(s: &str, header: bool) -> TableCell {
    TableCell {
        header,
        children: vec![text(s)],
    }
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
    assert!(parse_document("\n\n   \n").is_empty());
}

#[test]
fn heading_with_inline_formatting() {
    let doc = parse_document("# Hello **World**");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Heading {
            level: 1,
            children: vec![
                text("Hello "),
                InlineNode::Strong {
                    children: vec![text("World")]
                },
            ],
        }]
    );
}

#[test]
fn paragraph_lines_are_joined() {
    let doc = parse_document("first line\nsecond line\n\nnext paragraph");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Paragraph {
                children: vec![text("first line\nsecond line")]
            },
            BlockNode::Paragraph {
                children: vec![text("next paragraph")]
            },
        ]
    );
}

#[rstest]
#[case("para\n# Heading")]
#[case("para\n---")]
#[case("para\n```\ncode\n```")]
#[case("para\n> quote")]
#[case("para\n- item")]
#[case("para\n| a |\n|---|")]
fn paragraph_is_interrupted_by_other_constructs(#[case] input: &str) {
    let doc = parse_document(input);
    assert_eq!(doc.blocks.len(), 2, "input: {input:?}");
    assert_eq!(
        doc.blocks[0],
        BlockNode::Paragraph {
            children: vec![text("para")]
        }
    );
}

#[rstest]
#[case("para\n  > not a quote")]
#[case("para\n  ```")]
fn indented_markers_continue_paragraph(#[case] input: &str) {
    let doc = parse_document(input);
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            children: vec![text(input)]
        }]
    );
}

#[test]
fn indented_quote_marker_is_not_a_quote() {
    let doc = parse_document("  > x");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            children: vec![text("  > x")]
        }]
    );
}

#[test]
fn backslash_newline_passes_through_as_text() {
    let doc = parse_document("one\\\ntwo");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            children: vec![text("one\\\ntwo")]
        }]
    );
}

#[test]
fn thematic_break_between_paragraphs() {
    let doc = parse_document("Above\n\n---\n\nBelow");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Paragraph {
                children: vec![text("Above")]
            },
            BlockNode::ThematicBreak,
            BlockNode::Paragraph {
                children: vec![text("Below")]
            },
        ]
    );
}

#[test]
fn code_block_is_verbatim() {
    let doc = parse_document("```rust\nlet x = **1**;\n\n# not a heading\n```\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::CodeBlock {
                language: Some("rust".into()),
                content: "let x = **1**;\n\n# not a heading".into(),
            },
            BlockNode::Paragraph {
                children: vec![text("after")]
            },
        ]
    );
}

#[test]
fn unterminated_code_block_runs_to_end() {
    let doc = parse_document("```\nline one\nline two");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            content: "line one\nline two".into(),
        }]
    );
}

#[test]
fn blockquote_is_a_single_run() {
    let doc = parse_document("> first\n>\n> *second*\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Blockquote {
                children: vec![
                    text("first\n\n"),
                    InlineNode::Emphasis {
                        children: vec![text("second")]
                    },
                ]
            },
            BlockNode::Paragraph {
                children: vec![text("after")]
            },
        ]
    );
}

#[test]
fn bullet_list() {
    let doc = parse_document("- one\n* two\n+ three");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::List(List {
            ordered: false,
            start: 1,
            items: vec![
                ListItem {
                    children: vec![text("one")]
                },
                ListItem {
                    children: vec![text("two")]
                },
                ListItem {
                    children: vec![text("three")]
                },
            ],
        })]
    );
}

#[test]
fn ordered_list_captures_start() {
    let doc = parse_document("3. three\n4) four");
    match &doc.blocks[..] {
        [BlockNode::List(list)] => {
            assert!(list.ordered);
            assert_eq!(list.start, 3);
            assert_eq!(list.items.len(), 2);
        }
        other => panic!("expected one list, got {other:?}"),
    }
}

#[test]
fn first_item_decides_list_style() {
    let doc = parse_document("- bullet\n2. numbered");
    match &doc.blocks[..] {
        [BlockNode::List(list)] => {
            assert!(!list.ordered);
            assert_eq!(list.start, 1);
            assert_eq!(list.items.len(), 2);
        }
        other => panic!("expected one list, got {other:?}"),
    }
}

#[test]
fn nested_items_are_flattened_into_parent() {
    let doc = parse_document("- parent\n  - child **bold**\n  2. numbered\n    continuation\n- next");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::List(List {
            ordered: false,
            start: 1,
            items: vec![
                ListItem {
                    children: vec![
                        text("parent"),
                        text("\n- "),
                        text("child "),
                        InlineNode::Strong {
                            children: vec![text("bold")]
                        },
                        text("\n2. "),
                        text("numbered"),
                        text("\ncontinuation"),
                    ]
                },
                ListItem {
                    children: vec![text("next")]
                },
            ],
        })]
    );
}

#[test]
fn blank_line_ends_list() {
    let doc = parse_document("- a\n\n- b");
    assert_eq!(doc.blocks.len(), 2);
    assert!(
        doc.blocks
            .iter()
            .all(|b| matches!(b, BlockNode::List(l) if l.items.len() == 1))
    );
}

#[test]
fn table_with_header_and_rows() {
    let doc = parse_document("| Name | Age |\n|------|----:|\n| Ann | 30 |\n| Bob | **4** |\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Table(Table {
                rows: vec![
                    TableRow {
                        cells: vec![cell("Name", true), cell("Age", true)]
                    },
                    TableRow {
                        cells: vec![cell("Ann", false), cell("30", false)]
                    },
                    TableRow {
                        cells: vec![
                            cell("Bob", false),
                            TableCell {
                                header: false,
                                children: vec![InlineNode::Strong {
                                    children: vec![text("4")]
                                }],
                            },
                        ]
                    },
                ]
            }),
            BlockNode::Paragraph {
                children: vec![text("after")]
            },
        ]
    );
}

#[test]
fn separator_without_dashes_still_starts_a_table() {
    let doc = parse_document("| a | b |\n| | |\n| 1 | 2 |");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Table(Table {
            rows: vec![
                TableRow {
                    cells: vec![cell("a", true), cell("b", true)]
                },
                TableRow {
                    cells: vec![cell("1", false), cell("2", false)]
                },
            ]
        })]
    );
}

#[test]
fn pipe_line_without_separator_is_a_paragraph() {
    let doc = parse_document("a | b\nc | d");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            children: vec![text("a | b\nc | d")]
        }]
    );
}

#[test]
fn ragged_table_rows_keep_their_cell_counts() {
    let doc = parse_document("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |");
    let BlockNode::Table(table) = &doc.blocks[0] else {
        panic!("expected table");
    };
    let counts: Vec<usize> = table.rows.iter().map(|r| r.cells.len()).collect();
    assert_eq!(counts, vec![2, 1, 3]);
}

#[test]
fn indented_text_outside_list_is_paragraph() {
    let doc = parse_document("  - not a list");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            children: vec![text("  - not a list")]
        }]
    );
}

#[test]
fn mixed_document_keeps_order() {
    let md = "# Title\n\nIntro text.\n\n- a\n- b\n\n> quote\n\n---\n\n```\ncode\n```";
    let kinds: Vec<&str> = parse_document(md)
        .blocks
        .iter()
        .map(|b| match b {
            BlockNode::Heading { .. } => "heading",
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::CodeBlock { .. } => "code",
            BlockNode::List(_) => "list",
            BlockNode::Blockquote { .. } => "quote",
            BlockNode::Table(_) => "table",
            BlockNode::ThematicBreak => "break",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["heading", "paragraph", "list", "quote", "break", "code"]
    );
}
