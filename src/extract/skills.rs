use serde::Deserialize;

use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::SKILLS;

const NAME: &str = "skills";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "skill_groups.json",
    tables: &[&SKILLS],
    extract,
};

#[derive(Debug, Deserialize)]
struct SkillGroup {
    name: String,
    skills: Vec<String>,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let groups: Vec<SkillGroup> = decode_records(NAME, document)?;

    let mut skills = RowBatch::new(&SKILLS);
    for group in &groups {
        skills.extend(group.skills.iter().map(|skill| row![&group.name, skill]));
    }

    Ok(vec![skills])
}
