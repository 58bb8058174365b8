use serde::{Deserialize, Serialize};

/// Conversion settings.
///
/// Only `max_table_rows` and `max_table_columns` change the produced blocks.
/// `expand_sections`, `max_header_length` and `max_section_length` are
/// accepted for compatibility; the length limits are reported as advisory
/// warnings by [`crate::convert::convert_with_warnings`] but never truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    #[serde(alias = "expandSections")]
    pub expand_sections: bool,
    #[serde(alias = "maxHeaderLength")]
    pub max_header_length: usize,
    #[serde(alias = "maxSectionLength")]
    pub max_section_length: usize,
    #[serde(alias = "maxTableRows")]
    pub max_table_rows: usize,
    #[serde(alias = "maxTableColumns")]
    pub max_table_columns: usize,
}

impl ConvertOptions {
    pub const DEFAULT_MAX_HEADER_LENGTH: usize = 150;
    pub const DEFAULT_MAX_SECTION_LENGTH: usize = 3000;
    pub const DEFAULT_MAX_TABLE_ROWS: usize = 100;
    pub const DEFAULT_MAX_TABLE_COLUMNS: usize = 20;

    pub fn with_expand_sections(mut self, expand: bool) -> Self {
        self.expand_sections = expand;
        self
    }

    pub fn with_max_header_length(mut self, len: usize) -> Self {
        self.max_header_length = len;
        self
    }

    pub fn with_max_section_length(mut self, len: usize) -> Self {
        self.max_section_length = len;
        self
    }

    pub fn with_max_table_rows(mut self, rows: usize) -> Self {
        self.max_table_rows = rows;
        self
    }

    pub fn with_max_table_columns(mut self, columns: usize) -> Self {
        self.max_table_columns = columns;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            expand_sections: true,
            max_header_length: Self::DEFAULT_MAX_HEADER_LENGTH,
            max_section_length: Self::DEFAULT_MAX_SECTION_LENGTH,
            max_table_rows: Self::DEFAULT_MAX_TABLE_ROWS,
            max_table_columns: Self::DEFAULT_MAX_TABLE_COLUMNS,
        }
    }
}
