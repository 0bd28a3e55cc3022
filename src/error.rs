use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the database
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file for {category} not found: {}", path.display())]
    InputNotFound {
        category: &'static str,
        path: PathBuf,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {category} input{}: {message}", EntityLabel(entity))]
    MalformedInput {
        category: &'static str,
        entity: Option<String>,
        message: String,
    },

    #[error("failed to create {object}: {source}")]
    Schema {
        object: String,
        #[source]
        source: SchemaFault,
    },

    #[error("duplicate key {key} in {table}")]
    ConstraintViolation {
        table: String,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Underlying cause of a schema failure
#[derive(Debug, Error)]
pub enum SchemaFault {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("row has {found} values but the table has {expected} columns")]
    Arity { expected: usize, found: usize },
}

impl LoadError {
    pub fn malformed(
        category: &'static str,
        entity: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        LoadError::MalformedInput {
            category,
            entity,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;

struct EntityLabel<'a>(&'a Option<String>);

impl fmt::Display for EntityLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(entity) => write!(f, " ({})", entity),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_entity() {
        let err = LoadError::malformed("weapons", Some("Swords / Katana".into()), "missing field `damage`");
        assert_eq!(
            err.to_string(),
            "malformed weapons input (Swords / Katana): missing field `damage`"
        );

        let err = LoadError::malformed("rings", None, "expected an array");
        assert_eq!(err.to_string(), "malformed rings input: expected an array");
    }
}
