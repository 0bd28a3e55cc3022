use serde::Deserialize;

use super::common::{member_rows, Price, Reference};
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::{ARMOR, ARMOR_QUALITIES, ARMOR_RESISTANCE};

const NAME: &str = "armor";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "armor.json",
    tables: &[&ARMOR, &ARMOR_RESISTANCE, &ARMOR_QUALITIES],
    extract,
};

#[derive(Debug, Deserialize)]
struct Armor {
    name: String,
    reference: Reference,
    rarity: i64,
    price: Price,
    resistance_values: Vec<Resistance>,
    qualities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Resistance {
    category: String,
    value: i64,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let armor: Vec<Armor> = decode_records(NAME, document)?;

    let mut pieces = RowBatch::new(&ARMOR);
    let mut resistances = RowBatch::new(&ARMOR_RESISTANCE);
    let mut qualities = RowBatch::new(&ARMOR_QUALITIES);

    for piece in &armor {
        pieces.push(row![
            &piece.name,
            &piece.reference.book,
            piece.reference.page,
            piece.rarity,
            piece.price.value,
            &piece.price.unit,
        ]);
        resistances.extend(
            piece
                .resistance_values
                .iter()
                .map(|r| row![&piece.name, &r.category, r.value]),
        );
        qualities.extend(member_rows(&piece.name, &piece.qualities));
    }

    Ok(vec![pieces, resistances, qualities])
}
