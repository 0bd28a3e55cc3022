use serde::Deserialize;

use super::common::{member_rows, Price, Reference, Scalar};
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::{PERSONAL_EFFECTS, PERSONAL_EFFECT_QUALITIES};

const NAME: &str = "personal_effects";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "personal_effects.json",
    tables: &[&PERSONAL_EFFECTS, &PERSONAL_EFFECT_QUALITIES],
    extract,
};

#[derive(Debug, Deserialize)]
struct PersonalEffect {
    name: String,
    reference: Reference,
    price: Option<Price>,
    rarity: Option<Scalar>,
    #[serde(default)]
    qualities: Vec<String>,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let items: Vec<PersonalEffect> = decode_records(NAME, document)?;

    let mut effects = RowBatch::new(&PERSONAL_EFFECTS);
    let mut qualities = RowBatch::new(&PERSONAL_EFFECT_QUALITIES);

    for item in &items {
        effects.push(row![
            &item.name,
            &item.reference.book,
            item.reference.page,
            item.price.as_ref().map(|p| p.value),
            item.price.as_ref().map(|p| &p.unit),
            item.rarity.as_ref(),
        ]);
        qualities.extend(member_rows(&item.name, &item.qualities));
    }

    Ok(vec![effects, qualities])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlValue;

    #[test]
    fn test_optional_fields_become_null() {
        let batches = extract(
            r#"[
                {
                    "name": "Traveling Pack",
                    "reference": {"book": "Core", "page": 244},
                    "price": {"value": 2, "unit": "bu"},
                    "rarity": 3,
                    "qualities": ["Mundane"]
                },
                {
                    "name": "Family Heirloom",
                    "reference": {"book": "Core", "page": 245}
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            batches[0].rows,
            vec![
                row!["Traveling Pack", "Core", 244_i64, 2_i64, "bu", 3_i64],
                vec![
                    SqlValue::from("Family Heirloom"),
                    SqlValue::from("Core"),
                    SqlValue::Integer(245),
                    SqlValue::Null,
                    SqlValue::Null,
                    SqlValue::Null,
                ],
            ]
        );
        assert_eq!(batches[1].rows, vec![row!["Traveling Pack", "Mundane"]]);
    }
}
