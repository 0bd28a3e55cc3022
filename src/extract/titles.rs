use serde::Deserialize;

use super::common::Reference;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::{TITLES, TITLE_ADVANCEMENTS};

const NAME: &str = "titles";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "titles.json",
    tables: &[&TITLES, &TITLE_ADVANCEMENTS],
    extract,
};

#[derive(Debug, Deserialize)]
struct Title {
    name: String,
    reference: Reference,
    status_award: StatusAward,
    xp_to_completion: i64,
    title_ability: String,
    advancements: Vec<TitleAdvancement>,
}

#[derive(Debug, Deserialize)]
struct StatusAward {
    base_award: i64,
    constraint: Option<StatusConstraint>,
}

/// Limit on the status a title awards, told apart by which keys are present
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum StatusConstraint {
    Threshold {
        #[serde(rename = "type")]
        kind: String,
        value: i64,
    },
    Span {
        range: (i64, i64),
    },
}

/// Flattened `(type, value, min, max)` columns with the unused shape left null
#[derive(Debug, Default, PartialEq)]
struct ConstraintColumns {
    kind: Option<String>,
    value: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
}

impl From<Option<&StatusConstraint>> for ConstraintColumns {
    fn from(constraint: Option<&StatusConstraint>) -> Self {
        match constraint {
            Some(StatusConstraint::Threshold { kind, value }) => ConstraintColumns {
                kind: Some(kind.clone()),
                value: Some(*value),
                ..Default::default()
            },
            Some(StatusConstraint::Span { range: (min, max) }) => ConstraintColumns {
                min: Some(*min),
                max: Some(*max),
                ..Default::default()
            },
            None => ConstraintColumns::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TitleAdvancement {
    rank: Option<i64>,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    special_access: bool,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let titles: Vec<Title> = decode_records(NAME, document)?;

    let mut rows = RowBatch::new(&TITLES);
    let mut advancements = RowBatch::new(&TITLE_ADVANCEMENTS);

    for title in &titles {
        let constraint = ConstraintColumns::from(title.status_award.constraint.as_ref());

        rows.push(row![
            &title.name,
            &title.reference.book,
            title.reference.page,
            title.status_award.base_award,
            constraint.kind,
            constraint.value,
            constraint.min,
            constraint.max,
            title.xp_to_completion,
            &title.title_ability,
        ]);
        advancements.extend(title.advancements.iter().map(|a| {
            row![&title.name, a.rank, &a.name, &a.kind, a.special_access]
        }));
    }

    Ok(vec![rows, advancements])
}
