use serde::Deserialize;

use super::common::Reference;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::ITEM_PATTERNS;

const NAME: &str = "item_patterns";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "item_patterns.json",
    tables: &[&ITEM_PATTERNS],
    extract,
};

#[derive(Debug, Deserialize)]
struct ItemPattern {
    name: String,
    reference: Reference,
    xp_cost: i64,
    rarity_modifier: i64,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let patterns: Vec<ItemPattern> = decode_records(NAME, document)?;

    let rows = patterns
        .iter()
        .map(|p| {
            row![
                &p.name,
                &p.reference.book,
                p.reference.page,
                p.xp_cost,
                p.rarity_modifier,
            ]
        })
        .collect();

    Ok(vec![RowBatch::with_rows(&ITEM_PATTERNS, rows)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_item_patterns() {
        let batches = extract(
            r#"[{
                "name": "Kakita Blade Pattern",
                "reference": {"book": "Courts of Stone", "page": 120},
                "xp_cost": 6,
                "rarity_modifier": 2
            }]"#,
        )
        .unwrap();

        assert_eq!(
            batches[0].rows,
            vec![row!["Kakita Blade Pattern", "Courts of Stone", 120_i64, 6_i64, 2_i64]]
        );
    }
}
