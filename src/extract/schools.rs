//! Schools and everything a character gains from them.
//!
//! One school record fans out into seven tables. Starting techniques and
//! starting outfit are lists of sized sets, numbered by their position in
//! the document. Starting skills are a single set whose size lives on the
//! school row.

use serde::Deserialize;

use super::common::{flatten_sets, member_rows, Reference, SizedSet};
use super::{Category, RowBatch};
use crate::error::Result;
use crate::parser::decode_records;
use crate::row;
use crate::schema::tables::{
    CURRICULUM, SCHOOLS, SCHOOL_RINGS, SCHOOL_STARTING_OUTFIT, SCHOOL_STARTING_SKILLS,
    SCHOOL_STARTING_TECHNIQUES, SCHOOL_TECHNIQUES_AVAILABLE,
};

const NAME: &str = "schools";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "schools.json",
    tables: &[
        &SCHOOLS,
        &SCHOOL_RINGS,
        &SCHOOL_STARTING_SKILLS,
        &SCHOOL_TECHNIQUES_AVAILABLE,
        &SCHOOL_STARTING_TECHNIQUES,
        &SCHOOL_STARTING_OUTFIT,
        &CURRICULUM,
    ],
    extract,
};

#[derive(Debug, Deserialize)]
struct School {
    name: String,
    reference: Reference,
    role: Vec<String>,
    clan: Option<String>,
    starting_skills: SizedSet,
    honor: i64,
    advantage_disadvantage: Option<String>,
    school_ability: String,
    mastery_ability: String,
    ring_increase: Vec<String>,
    techniques_available: Vec<String>,
    starting_techniques: Vec<SizedSet>,
    starting_outfit: Vec<SizedSet>,
    curriculum: Vec<Advance>,
}

#[derive(Debug, Deserialize)]
struct Advance {
    rank: i64,
    advance: String,
    #[serde(rename = "type")]
    kind: String,
    special_access: bool,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let schools: Vec<School> = decode_records(NAME, document)?;

    let mut school_rows = RowBatch::new(&SCHOOLS);
    let mut rings = RowBatch::new(&SCHOOL_RINGS);
    let mut starting_skills = RowBatch::new(&SCHOOL_STARTING_SKILLS);
    let mut techniques_available = RowBatch::new(&SCHOOL_TECHNIQUES_AVAILABLE);
    let mut starting_techniques = RowBatch::new(&SCHOOL_STARTING_TECHNIQUES);
    let mut starting_outfit = RowBatch::new(&SCHOOL_STARTING_OUTFIT);
    let mut curriculum = RowBatch::new(&CURRICULUM);

    for school in &schools {
        let name = school.name.as_str();

        school_rows.push(row![
            name,
            &school.reference.book,
            school.reference.page,
            school.role.join(", "),
            school.clan.as_ref(),
            school.starting_skills.size,
            school.honor,
            school.advantage_disadvantage.as_ref(),
            &school.school_ability,
            &school.mastery_ability,
        ]);

        rings.extend(member_rows(name, &school.ring_increase));
        starting_skills.extend(member_rows(name, &school.starting_skills.set));
        techniques_available.extend(member_rows(name, &school.techniques_available));
        starting_techniques.extend(flatten_sets(name, &school.starting_techniques));
        starting_outfit.extend(flatten_sets(name, &school.starting_outfit));
        curriculum.extend(school.curriculum.iter().map(|a| {
            row![name, a.rank, &a.advance, &a.kind, a.special_access]
        }));
    }

    Ok(vec![
        school_rows,
        rings,
        starting_skills,
        techniques_available,
        starting_techniques,
        starting_outfit,
        curriculum,
    ])
}
