use std::path::Path;

use rusqlite::{Connection, ErrorCode, Transaction};
use tracing::debug;

use super::schema_gen::{generate_create_table, generate_create_view};
use crate::error::{LoadError, Result, SchemaFault};
use crate::extract::RowBatch;
use crate::parser::SqlValue;
use crate::schema::TableSchema;

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    /// Open a fresh database, discarding any existing file at `db_path`
    pub fn new(db_path: &Path) -> Result<Self> {
        if db_path.exists() {
            std::fs::remove_file(db_path).map_err(|source| LoadError::Io {
                path: db_path.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(db_path)?;

        Ok(Self { conn })
    }

    /// Begin the single transaction spanning the whole load
    pub fn begin(&mut self) -> Result<WriteSession<'_>> {
        Ok(WriteSession {
            tx: self.conn.transaction()?,
        })
    }

    /// Finalize the database after commit
    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch("PRAGMA optimize;")?;
        self.conn.close().map_err(|(_, e)| LoadError::Database(e))
    }
}

/// Schema creation and inserts inside the load transaction.
///
/// Dropping a session without [`WriteSession::commit`] rolls everything back.
pub struct WriteSession<'conn> {
    tx: Transaction<'conn>,
}

impl WriteSession<'_> {
    /// Create the physical tables of a schema and, for paired tables, its
    /// merged view
    pub fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut tables = vec![schema.base_table()];
        tables.extend(schema.user_table());

        for table in tables {
            let sql = generate_create_table(schema, &table);
            self.tx
                .execute(&sql, [])
                .map_err(|e| schema_error(&table, e))?;
        }

        if let Some(sql) = generate_create_view(schema) {
            self.tx
                .execute(&sql, [])
                .map_err(|e| schema_error(schema.name, e))?;
        }

        Ok(())
    }

    /// Insert a batch into the schema's base table
    pub fn insert_batch(&self, batch: &RowBatch) -> Result<u64> {
        let schema = batch.table;
        let table = schema.base_table();
        let columns = schema.column_names();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders.join(", ")
        );

        let mut stmt = self.tx.prepare_cached(&insert_sql)?;

        for row in &batch.rows {
            check_row(schema, &table, row)?;

            for (idx, value) in row.iter().enumerate() {
                value.bind_to(idx + 1, &mut stmt)?;
            }
            stmt.raw_execute()
                .map_err(|e| insert_error(schema, &table, row, e))?;
        }

        debug!(table = %table, rows = batch.len(), "inserted batch");
        Ok(batch.len() as u64)
    }

    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }
}

fn schema_error(object: &str, source: rusqlite::Error) -> LoadError {
    LoadError::Schema {
        object: object.to_string(),
        source: SchemaFault::Sqlite(source),
    }
}

/// Reject rows that do not fit the table before SQLite sees them
fn check_row(schema: &TableSchema, table: &str, row: &[SqlValue]) -> Result<()> {
    if row.len() != schema.columns.len() {
        return Err(LoadError::Schema {
            object: table.to_string(),
            source: SchemaFault::Arity {
                expected: schema.columns.len(),
                found: row.len(),
            },
        });
    }

    for (col, value) in schema.columns.iter().zip(row) {
        if !col.nullable && value.is_null() {
            return Err(LoadError::malformed(
                schema.name,
                Some(describe_key(schema, row)),
                format!("required column {} is null", col.name),
            ));
        }
    }

    Ok(())
}

fn insert_error(
    schema: &TableSchema,
    table: &str,
    row: &[SqlValue],
    err: rusqlite::Error,
) -> LoadError {
    let duplicate = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::ConstraintViolation
    );

    if duplicate {
        LoadError::ConstraintViolation {
            table: table.to_string(),
            key: describe_key(schema, row),
            source: err,
        }
    } else {
        LoadError::Database(err)
    }
}

/// Render the primary key of a row, or the whole row for keyless tables
fn describe_key(schema: &TableSchema, row: &[SqlValue]) -> String {
    let parts: Vec<String> = if schema.primary_key.is_empty() {
        row.iter().map(|v| v.to_string()).collect()
    } else {
        schema
            .primary_key
            .iter()
            .filter_map(|key| {
                let idx = schema.column_index(key)?;
                row.get(idx).map(|value| format!("{}={}", key, value))
            })
            .collect()
    };

    format!("({})", parts.join(", "))
}
