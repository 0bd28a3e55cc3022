use serde::Deserialize;

use super::common::Reference;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::QUALITIES;

const NAME: &str = "qualities";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "qualities.json",
    tables: &[&QUALITIES],
    extract,
};

#[derive(Debug, Deserialize)]
struct Quality {
    name: String,
    reference: Reference,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let qualities: Vec<Quality> = decode_records(NAME, document)?;

    let rows = qualities
        .iter()
        .map(|q| row![&q.name, &q.reference.book, q.reference.page])
        .collect();

    Ok(vec![RowBatch::with_rows(&QUALITIES, rows)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn test_extract_qualities() {
        let batches = extract(
            r#"[{"name": "Ceremonial", "reference": {"book": "Core", "page": 240}}]"#,
        )
        .unwrap();
        assert_eq!(batches[0].rows, vec![row!["Ceremonial", "Core", 240_i64]]);
    }

    #[test]
    fn test_missing_reference_is_malformed() {
        let err = extract(r#"[{"name": "Sacred"}]"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedInput { category: "qualities", entity: Some(ref e), .. } if e == "Sacred"
        ));
    }
}
