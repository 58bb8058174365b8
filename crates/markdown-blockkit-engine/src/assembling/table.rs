use crate::{
    blockkit::{Block, ColumnSetting, TableCell, TextStyle},
    options::ConvertOptions,
    tree::Table,
};

use super::inline::render_inline_or_placeholder;

/// Builds a table block, applying the row and column caps independently.
///
/// Short rows are not padded and long rows are cut to the column cap, so
/// emitted rows may differ in length. The table gets one wrapped column
/// setting per cell of its widest emitted row. Returns `None` when no row
/// survives the caps.
pub fn build_table(table: &Table, options: &ConvertOptions) -> Option<Block> {
    let rows: Vec<Vec<TableCell>> = table
        .rows
        .iter()
        .take(options.max_table_rows)
        .map(|row| {
            row.cells
                .iter()
                .take(options.max_table_columns)
                .map(|cell| {
                    TableCell::from_inline(render_inline_or_placeholder(
                        &cell.children,
                        TextStyle::default(),
                    ))
                })
                .collect()
        })
        .collect();

    if rows.is_empty() {
        log::debug!("skipping table with no emitted rows");
        return None;
    }
    if table.rows.len() > rows.len() {
        log::debug!(
            "table truncated from {} to {} rows",
            table.rows.len(),
            rows.len()
        );
    }
    if table
        .rows
        .iter()
        .any(|row| row.cells.len() > options.max_table_columns)
    {
        log::debug!(
            "table rows truncated to {} columns",
            options.max_table_columns
        );
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    Some(Block::Table {
        rows,
        column_settings: vec![ColumnSetting::default(); width],
    })
}
