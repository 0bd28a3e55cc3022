use serde::Deserialize;

use super::common::Bounds;
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::{HERITAGE_EFFECTS, SAMURAI_HERITAGE};

const NAME: &str = "heritage";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "samurai_heritage.json",
    tables: &[&SAMURAI_HERITAGE, &HERITAGE_EFFECTS],
    extract,
};

#[derive(Debug, Deserialize)]
struct Ancestor {
    source: String,
    roll: Bounds,
    result: String,
    modifiers: Modifiers,
    other_effects: OtherEffects,
}

#[derive(Debug, Deserialize)]
struct Modifiers {
    glory: i64,
    honor: i64,
    status: i64,
}

#[derive(Debug, Deserialize)]
struct OtherEffects {
    #[serde(rename = "type")]
    kind: String,
    instructions: String,
    #[serde(default)]
    outcomes: Vec<Outcome>,
}

/// Follow-up roll result; an outcome without a roll applies unconditionally
#[derive(Debug, Deserialize)]
struct Outcome {
    roll: Option<Bounds>,
    outcome: String,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let ancestors: Vec<Ancestor> = decode_records(NAME, document)?;

    let mut heritage = RowBatch::new(&SAMURAI_HERITAGE);
    let mut effects = RowBatch::new(&HERITAGE_EFFECTS);

    for ancestor in &ancestors {
        heritage.push(row![
            &ancestor.source,
            ancestor.roll.min,
            ancestor.roll.max,
            &ancestor.result,
            ancestor.modifiers.glory,
            ancestor.modifiers.honor,
            ancestor.modifiers.status,
            &ancestor.other_effects.kind,
            &ancestor.other_effects.instructions,
        ]);
        effects.extend(ancestor.other_effects.outcomes.iter().map(|o| {
            row![
                &ancestor.result,
                o.roll.map(|r| r.min),
                o.roll.map(|r| r.max),
                &o.outcome,
            ]
        }));
    }

    Ok(vec![heritage, effects])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlValue;

    #[test]
    fn test_extract_heritage_outcomes() {
        let batches = extract(
            r#"[
                {
                    "source": "Core",
                    "roll": {"min": 1, "max": 1},
                    "result": "Wondrous Work",
                    "modifiers": {"glory": 3, "honor": 0, "status": 0},
                    "other_effects": {
                        "type": "item",
                        "instructions": "Roll for the work.",
                        "outcomes": [
                            {"roll": {"min": 1, "max": 3}, "outcome": "Sword"},
                            {"outcome": "Anything else"}
                        ]
                    }
                },
                {
                    "source": "Core",
                    "roll": {"min": 2, "max": 2},
                    "result": "Dynasty Builder",
                    "modifiers": {"glory": 0, "honor": 0, "status": 3},
                    "other_effects": {"type": "skill", "instructions": "Gain a skill."}
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(batches[0].len(), 2);
        assert_eq!(
            batches[1].rows,
            vec![
                row!["Wondrous Work", 1_i64, 3_i64, "Sword"],
                vec![
                    SqlValue::from("Wondrous Work"),
                    SqlValue::Null,
                    SqlValue::Null,
                    SqlValue::from("Anything else"),
                ],
            ]
        );
    }
}
