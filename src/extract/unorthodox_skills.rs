//! Skills a character may pick for an unorthodox upbringing.
//!
//! They live in the outcome of the second entry of the question 8 document.

use serde::Deserialize;

use super::{Category, RowBatch};
use crate::error::{LoadError, Result};
use crate::parser::parse_array;
use crate::row;
use crate::schema::tables::UNORTHODOX_SKILLS;

const NAME: &str = "unorthodox_skills";

/// Position of the unorthodox choice among the question 8 answers
const UNORTHODOX_ENTRY: usize = 1;

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "question_8.json",
    tables: &[&UNORTHODOX_SKILLS],
    extract,
};

#[derive(Debug, Deserialize)]
struct Answer {
    outcome: Outcome,
}

#[derive(Debug, Deserialize)]
struct Outcome {
    values: Vec<String>,
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let mut answers = parse_array(NAME, document)?;
    if answers.len() <= UNORTHODOX_ENTRY {
        return Err(LoadError::malformed(
            NAME,
            None,
            format!("expected at least {} answers, found {}", UNORTHODOX_ENTRY + 1, answers.len()),
        ));
    }

    let label = format!("#{}", UNORTHODOX_ENTRY);
    let answer: Answer = serde_json::from_value(answers.swap_remove(UNORTHODOX_ENTRY))
        .map_err(|e| LoadError::malformed(NAME, Some(label), e.to_string()))?;

    let rows = answer.outcome.values.iter().map(|skill| row![skill]).collect();

    Ok(vec![RowBatch::with_rows(&UNORTHODOX_SKILLS, rows)])
}
