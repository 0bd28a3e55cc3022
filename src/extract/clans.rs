use serde::Deserialize;
use serde_json::Value;

use super::common::{member_rows, Reference, Scalar};
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::{decode_entries, decode_records};
use crate::row;
use crate::schema::tables::{CLANS, FAMILIES, FAMILY_RINGS, FAMILY_SKILLS};

const NAME: &str = "clans";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "clans.json",
    tables: &[&CLANS, &FAMILIES, &FAMILY_RINGS, &FAMILY_SKILLS],
    extract,
};

#[derive(Debug, Deserialize)]
struct Clan {
    name: String,
    reference: Reference,
    #[serde(rename = "type")]
    kind: String,
    ring_increase: String,
    skill_increase: String,
    status: i64,
    families: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Family {
    name: String,
    reference: Reference,
    glory: Scalar,
    wealth: Scalar,
    ring_increase: Vec<String>,
    skill_increase: Vec<String>,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let clans: Vec<Clan> = decode_records(NAME, document)?;

    let mut clan_rows = RowBatch::new(&CLANS);
    let mut families = RowBatch::new(&FAMILIES);
    let mut family_rings = RowBatch::new(&FAMILY_RINGS);
    let mut family_skills = RowBatch::new(&FAMILY_SKILLS);

    for clan in clans {
        clan_rows.push(row![
            &clan.name,
            &clan.reference.book,
            clan.reference.page,
            &clan.kind,
            &clan.ring_increase,
            &clan.skill_increase,
            clan.status,
        ]);

        let members: Vec<Family> = decode_entries(NAME, Some(clan.name.as_str()), clan.families)?;
        for family in &members {
            families.push(row![
                &clan.name,
                &family.name,
                &family.reference.book,
                family.reference.page,
                &family.glory,
                &family.wealth,
            ]);
            family_rings.extend(member_rows(&family.name, &family.ring_increase));
            family_skills.extend(member_rows(&family.name, &family.skill_increase));
        }
    }

    Ok(vec![clan_rows, families, family_rings, family_skills])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clans_and_families() {
        let batches = extract(
            r#"[{
                "name": "Crane",
                "reference": {"book": "Core", "page": 42},
                "type": "Great Clan",
                "ring_increase": "Air",
                "skill_increase": "Culture",
                "status": 35,
                "families": [{
                    "name": "Doji",
                    "reference": {"book": "Core", "page": 44},
                    "glory": 8,
                    "wealth": 6,
                    "ring_increase": ["Air", "Water"],
                    "skill_increase": ["Courtesy", "Sentiment"]
                }]
            }]"#,
        )
        .unwrap();

        assert_eq!(
            batches[0].rows,
            vec![row!["Crane", "Core", 42_i64, "Great Clan", "Air", "Culture", 35_i64]]
        );
        assert_eq!(
            batches[1].rows,
            vec![row!["Crane", "Doji", "Core", 44_i64, 8_i64, 6_i64]]
        );
        assert_eq!(batches[2].rows, vec![row!["Doji", "Air"], row!["Doji", "Water"]]);
        assert_eq!(batches[3].len(), 2);
    }
}
