//! JSON shapes shared by several categories

use serde::Deserialize;

use crate::parser::{Row, SqlValue};
use crate::row;

/// Source book and page
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub book: String,
    pub page: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub value: i64,
    pub unit: String,
}

/// Inclusive `{min, max}` pair used for weapon ranges and dice rolls
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

/// "Choose `size` items from `set`"
#[derive(Debug, Clone, Deserialize)]
pub struct SizedSet {
    pub size: i64,
    pub set: Vec<String>,
}

/// A field the documents carry either as a number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Text(String),
}

impl From<&Scalar> for SqlValue {
    fn from(value: &Scalar) -> Self {
        match value {
            Scalar::Integer(i) => SqlValue::Integer(*i),
            Scalar::Text(s) => SqlValue::Text(s.clone()),
        }
    }
}

/// One `(parent, member)` row per member
pub fn member_rows(parent: &str, members: &[String]) -> Vec<Row> {
    members.iter().map(|member| row![parent, member]).collect()
}

/// One `(parent, set_id, set_size, member)` row per member of every set.
///
/// `set_id` is the zero-based position of the set in the source array.
pub fn flatten_sets(parent: &str, sets: &[SizedSet]) -> Vec<Row> {
    sets.iter()
        .enumerate()
        .flat_map(|(set_id, set)| {
            set.set
                .iter()
                .map(move |member| row![parent, set_id, set.size, member])
        })
        .collect()
}
