use serde::Deserialize;

use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::RINGS;

const NAME: &str = "rings";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "rings.json",
    tables: &[&RINGS],
    extract,
};

#[derive(Debug, Deserialize)]
struct Ring {
    name: String,
    outstanding_quality: String,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let rings: Vec<Ring> = decode_records(NAME, document)?;

    let rows = rings
        .iter()
        .map(|ring| row![&ring.name, &ring.outstanding_quality])
        .collect();

    Ok(vec![RowBatch::with_rows(&RINGS, rows)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rings() {
        let batches = extract(
            r#"[
                {"name": "Air", "outstanding_quality": "Grace"},
                {"name": "Earth", "outstanding_quality": "Stability"}
            ]"#,
        )
        .unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].rows, vec![row!["Air", "Grace"], row!["Earth", "Stability"]]);
    }
}
