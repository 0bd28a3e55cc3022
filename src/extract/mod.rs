//! Per-category extractors turning JSON documents into row batches.
//!
//! Every extractor is a pure function of the document text. The loader
//! locates the file, hands over its contents, and inserts the batches.

pub mod advantages;
pub mod armor;
pub mod clans;
pub mod common;
pub mod heritage;
pub mod item_patterns;
pub mod personal_effects;
pub mod qualities;
pub mod rings;
pub mod schools;
pub mod skills;
pub mod techniques;
pub mod titles;
pub mod unorthodox_skills;
pub mod weapons;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::Row;
use crate::schema::TableSchema;

/// Directory under the data root holding the input documents
pub const JSON_DIR: &str = "json";

/// Rows destined for one table
#[derive(Debug)]
pub struct RowBatch {
    pub table: &'static TableSchema,
    pub rows: Vec<Row>,
}

impl RowBatch {
    pub fn new(table: &'static TableSchema) -> Self {
        Self {
            table,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(table: &'static TableSchema, rows: Vec<Row>) -> Self {
        Self { table, rows }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.extend(rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub type ExtractFn = fn(&str) -> Result<Vec<RowBatch>>;

/// One entity category: its input document, its tables and its extractor
pub struct Category {
    pub name: &'static str,
    /// File name under [`JSON_DIR`]
    pub source_file: &'static str,
    /// Tables created before the extracted rows are inserted
    pub tables: &'static [&'static TableSchema],
    pub extract: ExtractFn,
}

impl Category {
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(JSON_DIR).join(self.source_file)
    }
}

/// All categories in load order: simple tables, equipment, then the
/// structurally complex ones
pub static ALL_CATEGORIES: &[&Category] = &[
    &rings::CATEGORY,
    &skills::CATEGORY,
    &techniques::CATEGORY,
    &advantages::CATEGORY,
    &unorthodox_skills::CATEGORY,
    &titles::CATEGORY,
    &item_patterns::CATEGORY,
    &qualities::CATEGORY,
    &personal_effects::CATEGORY,
    &armor::CATEGORY,
    &weapons::CATEGORY,
    &clans::CATEGORY,
    &heritage::CATEGORY,
    &schools::CATEGORY,
];

/// Get category by name
pub fn get_category(name: &str) -> Option<&'static Category> {
    ALL_CATEGORIES.iter().find(|c| c.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ALL_TABLES, USER_DESCRIPTIONS};

    #[test]
    fn test_every_table_belongs_to_one_category() {
        for table in ALL_TABLES {
            let owners = ALL_CATEGORIES
                .iter()
                .filter(|c| c.tables.iter().any(|t| std::ptr::eq(*t, *table)))
                .count();
            let expected = if std::ptr::eq(*table, &USER_DESCRIPTIONS) { 0 } else { 1 };
            assert_eq!(owners, expected, "table {}", table.name);
        }
    }

    #[test]
    fn test_source_path() {
        let path = weapons::CATEGORY.source_path(Path::new("data"));
        assert_eq!(path, Path::new("data").join("json").join("weapons.json"));
        assert!(get_category("schools").is_some());
    }
}
