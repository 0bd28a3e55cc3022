use serde::Deserialize;
use serde_json::Value;

use super::common::Reference;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::{decode_entries, decode_records};
use crate::row;
use crate::schema::tables::TECHNIQUES;

const NAME: &str = "techniques";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "techniques.json",
    tables: &[&TECHNIQUES],
    extract,
};

#[derive(Debug, Deserialize)]
struct TechniqueCategory {
    name: String,
    subcategories: Vec<Subcategory>,
}

#[derive(Debug, Deserialize)]
struct Subcategory {
    name: String,
    techniques: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Technique {
    name: String,
    restriction: Option<String>,
    reference: Reference,
    rank: i64,
    xp: i64,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let categories: Vec<TechniqueCategory> = decode_records(NAME, document)?;

    let mut techniques = RowBatch::new(&TECHNIQUES);
    for category in categories {
        for subcategory in category.subcategories {
            let group = format!("{} / {}", category.name, subcategory.name);
            let entries: Vec<Technique> =
                decode_entries(NAME, Some(group.as_str()), subcategory.techniques)?;

            techniques.extend(entries.iter().map(|t| {
                row![
                    &category.name,
                    &subcategory.name,
                    &t.name,
                    t.restriction.as_ref(),
                    &t.reference.book,
                    t.reference.page,
                    t.rank,
                    t.xp,
                ]
            }));
        }
    }

    Ok(vec![techniques])
}
