/// Side table of user-authored descriptions joined into merged views
pub const DESCRIPTIONS_TABLE: &str = "user_descriptions";

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Text,
    /// Stored as INTEGER 0/1
    Boolean,
}

impl ColumnType {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a column every extracted row must fill
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// How a table is materialized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableLayout {
    /// `base_<name>` and `user_<name>` tables with a `<name>` view over both
    Paired,
    /// A single authoritative table named exactly `<name>`
    Standalone,
}

/// Extra description join on an ability-name column of a merged view.
///
/// Exposes `<prefix>_description` and `<prefix>_short_desc`.
#[derive(Debug, Clone)]
pub struct DescriptionJoin {
    pub column: &'static str,
    pub prefix: &'static str,
}

impl DescriptionJoin {
    pub const fn new(column: &'static str, prefix: &'static str) -> Self {
        Self { column, prefix }
    }
}

/// Table schema definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Stem for paired tables, full table name for standalone ones
    pub name: &'static str,
    pub layout: TableLayout,
    pub columns: &'static [Column],
    pub primary_key: &'static [&'static str],
    /// Column joined against `user_descriptions.name` in the merged view
    pub merge_key: Option<&'static str>,
    pub description_joins: &'static [DescriptionJoin],
}

impl TableSchema {
    /// Table the pipeline writes rows into
    pub fn base_table(&self) -> String {
        match self.layout {
            TableLayout::Paired => format!("base_{}", self.name),
            TableLayout::Standalone => self.name.to_string(),
        }
    }

    /// Table reserved for user-authored rows
    pub fn user_table(&self) -> Option<String> {
        match self.layout {
            TableLayout::Paired => Some(format!("user_{}", self.name)),
            TableLayout::Standalone => None,
        }
    }

    /// Merged view over the base and user tables
    pub fn view_name(&self) -> Option<&'static str> {
        match self.layout {
            TableLayout::Paired => Some(self.name),
            TableLayout::Standalone => None,
        }
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}
