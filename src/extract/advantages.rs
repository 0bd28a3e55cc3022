use serde::Deserialize;
use serde_json::Value;

use super::common::Reference;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::{decode_entries, decode_records};
use crate::row;
use crate::schema::tables::ADVANTAGES_DISADVANTAGES;

const NAME: &str = "advantages_disadvantages";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "advantages_disadvantages.json",
    tables: &[&ADVANTAGES_DISADVANTAGES],
    extract,
};

#[derive(Debug, Deserialize)]
struct AdvantageCategory {
    name: String,
    entries: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Advantage {
    name: String,
    reference: Reference,
    ring: String,
    types: Vec<String>,
    effects: String,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let categories: Vec<AdvantageCategory> = decode_records(NAME, document)?;

    let mut advantages = RowBatch::new(&ADVANTAGES_DISADVANTAGES);
    for category in categories {
        let entries: Vec<Advantage> =
            decode_entries(NAME, Some(category.name.as_str()), category.entries)?;

        advantages.extend(entries.iter().map(|entry| {
            row![
                &category.name,
                &entry.name,
                &entry.reference.book,
                entry.reference.page,
                &entry.ring,
                entry.types.join(", "),
                &entry.effects,
            ]
        }));
    }

    Ok(vec![advantages])
}
