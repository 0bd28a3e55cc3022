//! Full rebuild of the database from the JSON documents

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LoadError, Result};
use crate::extract::{Category, ALL_CATEGORIES, JSON_DIR};
use crate::schema::tables::USER_DESCRIPTIONS;
use crate::ui::{Phase, Ui};
use crate::writer::SqliteWriter;

/// Database file name written under the data root by default
pub const DEFAULT_DB_NAME: &str = "paperblossoms.db";

/// Where to read documents from and where to write the database
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Directory holding the `json/` input folder
    pub root: PathBuf,
    pub output: PathBuf,
}

impl LoadConfig {
    /// Read `<root>/json/` and write `<root>/paperblossoms.db`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output = root.join(DEFAULT_DB_NAME);
        Self { root, output }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn json_dir(&self) -> PathBuf {
        self.root.join(JSON_DIR)
    }
}

/// Row counts of a finished load
#[derive(Debug, Default, Clone)]
pub struct LoadSummary {
    pub categories: usize,
    /// Rows written per base table, in insertion order
    pub tables: Vec<(String, u64)>,
}

impl LoadSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|(_, rows)| rows).sum()
    }

    pub fn rows_in(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, rows)| *rows)
    }
}

/// Rebuild the database from every category
pub fn load_database(config: &LoadConfig, ui: &mut impl Ui) -> Result<LoadSummary> {
    load_categories(config, ALL_CATEGORIES, ui)
}

/// Rebuild the database from the given categories.
///
/// Everything runs inside one transaction. On error nothing is committed,
/// and because the previous file is deleted up front no database remains.
pub fn load_categories(
    config: &LoadConfig,
    categories: &[&Category],
    ui: &mut impl Ui,
) -> Result<LoadSummary> {
    ui.set_phase(Phase::Preparing);
    info!(root = %config.root.display(), output = %config.output.display(), "rebuilding database");

    let mut writer = SqliteWriter::new(&config.output)?;
    let session = writer.begin()?;
    session.create_table(&USER_DESCRIPTIONS)?;

    ui.set_phase(Phase::Loading);
    let mut summary = LoadSummary::default();
    let total = categories.len() as u64;

    for (idx, category) in categories.iter().enumerate() {
        ui.set_progress(idx as u64, total, category.name);

        for table in category.tables {
            session.create_table(table)?;
        }
        let document = read_document(category, &config.root)?;

        let batches = (category.extract)(&document)?;
        let mut rows = 0;
        for batch in &batches {
            let count = session.insert_batch(batch)?;
            summary.tables.push((batch.table.base_table(), count));
            rows += count;
        }

        summary.categories += 1;
        ui.log(format!("{}: {} rows in {} tables", category.name, rows, batches.len()));
    }
    ui.set_progress(total, total, "done");

    ui.set_phase(Phase::Committing);
    session.commit()?;
    writer.finalize()?;

    ui.set_phase(Phase::Complete);
    Ok(summary)
}

/// Read a category's input document
fn read_document(category: &Category, root: &Path) -> Result<String> {
    let path = category.source_path(root);

    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::InputNotFound {
            category: category.name,
            path,
        },
        _ => LoadError::Io { path, source },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::get_category;
    use crate::ui::SilentUi;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn write_json(root: &Path, file: &str, contents: &str) {
        let dir = root.join(JSON_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(file), contents).unwrap();
    }

    #[test]
    fn test_config_defaults() {
        let config = LoadConfig::new("data");
        assert_eq!(config.output, Path::new("data").join(DEFAULT_DB_NAME));
        assert_eq!(config.json_dir(), Path::new("data").join("json"));

        let config = config.with_output("out.db");
        assert_eq!(config.output, Path::new("out.db"));
    }

    #[test]
    fn test_load_selected_categories() {
        let dir = TempDir::new().unwrap();
        write_json(
            dir.path(),
            "rings.json",
            r#"[{"name": "Void", "outstanding_quality": "Insight"}]"#,
        );
        write_json(
            dir.path(),
            "qualities.json",
            r#"[{"name": "Durable", "reference": {"book": "Core", "page": 240}}]"#,
        );

        let config = LoadConfig::new(dir.path());
        let categories = [
            get_category("rings").unwrap(),
            get_category("qualities").unwrap(),
        ];
        let summary = load_categories(&config, &categories, &mut SilentUi::new()).unwrap();

        assert_eq!(summary.categories, 2);
        assert_eq!(summary.total_rows(), 2);
        assert_eq!(summary.rows_in("base_qualities"), Some(1));

        let conn = Connection::open(&config.output).unwrap();
        let quality: String = conn
            .query_row("SELECT quality FROM qualities", [], |r| r.get(0))
            .unwrap();
        assert_eq!(quality, "Durable");
    }

    #[test]
    fn test_missing_input_names_category() {
        let dir = TempDir::new().unwrap();
        let config = LoadConfig::new(dir.path());
        let categories = [get_category("armor").unwrap()];

        match load_categories(&config, &categories, &mut SilentUi::new()).unwrap_err() {
            LoadError::InputNotFound { category, path } => {
                assert_eq!(category, "armor");
                assert!(path.ends_with("json/armor.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failed_load_commits_nothing() {
        let dir = TempDir::new().unwrap();
        write_json(
            dir.path(),
            "rings.json",
            r#"[{"name": "Void", "outstanding_quality": "Insight"}]"#,
        );
        write_json(dir.path(), "qualities.json", r#"[{"name": "Durable"}]"#);

        let config = LoadConfig::new(dir.path());
        let categories = [
            get_category("rings").unwrap(),
            get_category("qualities").unwrap(),
        ];
        let err = load_categories(&config, &categories, &mut SilentUi::new()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { category: "qualities", .. }));

        let conn = Connection::open(&config.output).unwrap();
        let tables: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master", [], |r| r.get(0))
            .unwrap();
        assert_eq!(tables, 0);
    }
}
