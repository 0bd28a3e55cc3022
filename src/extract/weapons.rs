//! Weapons, one row per weapon and grip.
//!
//! A grip carries effects that overlay the weapon's base profile. Skill and
//! range effects replace the base value, damage and deadliness effects add
//! to it, and quality effects append grip-specific qualities. A grip may
//! hold at most one effect per overridable attribute.

use serde::Deserialize;
use serde_json::Value;

use super::common::{Bounds, Price, Reference};
use super::{Category, RowBatch};
use crate::error::{LoadError, Result};
use crate::parser::{decode_entries, decode_records};
use crate::row;
use crate::schema::tables::{WEAPONS, WEAPON_QUALITIES};

const NAME: &str = "weapons";

pub static CATEGORY: Category = Category {
    name: NAME,
    source_file: "weapons.json",
    tables: &[&WEAPONS, &WEAPON_QUALITIES],
    extract,
};

#[derive(Debug, Deserialize)]
struct WeaponCategory {
    name: String,
    entries: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub reference: Reference,
    pub skill: String,
    pub range: Bounds,
    pub damage: i64,
    pub deadliness: i64,
    pub rarity: i64,
    pub price: Price,
    /// Qualities shared by every grip
    pub qualities: Vec<String>,
    pub grips: Vec<Grip>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Grip {
    pub name: String,
    pub effects: Vec<GripEffect>,
}

/// Overlay a grip applies to one weapon attribute
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "attribute", rename_all = "lowercase")]
pub enum GripEffect {
    Skill { value: String },
    Range { value: Bounds },
    Damage { value_increase: i64 },
    Deadliness { value_increase: i64 },
    Quality { value: String },
    /// Attributes the database has no column for
    #[serde(other)]
    Other,
}

/// Attribute values of a weapon held with a particular grip
#[derive(Debug, Clone, PartialEq)]
pub struct GripProfile {
    pub skill: String,
    pub range: Bounds,
    pub damage: i64,
    pub deadliness: i64,
}

/// A grip holding more than one effect for the same attribute
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConflict {
    pub attribute: &'static str,
}

impl Grip {
    /// Qualities this grip adds on top of the weapon's own
    pub fn qualities(&self) -> impl Iterator<Item = &String> {
        self.effects.iter().filter_map(|effect| match effect {
            GripEffect::Quality { value } => Some(value),
            _ => None,
        })
    }
}

impl Weapon {
    pub fn base_profile(&self) -> GripProfile {
        GripProfile {
            skill: self.skill.clone(),
            range: self.range,
            damage: self.damage,
            deadliness: self.deadliness,
        }
    }
}

/// Resolve a grip's overlays against the weapon's base profile
pub fn resolve_grip(
    weapon: &Weapon,
    grip: &Grip,
) -> std::result::Result<GripProfile, OverlayConflict> {
    let effects = &grip.effects;

    let skill = single_effect(effects, "skill", |effect| match effect {
        GripEffect::Skill { value } => Some(value.clone()),
        _ => None,
    })?;
    let range = single_effect(effects, "range", |effect| match effect {
        GripEffect::Range { value } => Some(*value),
        _ => None,
    })?;
    let damage = single_effect(effects, "damage", |effect| match effect {
        GripEffect::Damage { value_increase } => Some(*value_increase),
        _ => None,
    })?;
    let deadliness = single_effect(effects, "deadliness", |effect| match effect {
        GripEffect::Deadliness { value_increase } => Some(*value_increase),
        _ => None,
    })?;

    Ok(GripProfile {
        skill: skill.unwrap_or_else(|| weapon.skill.clone()),
        range: range.unwrap_or(weapon.range),
        damage: weapon.damage + damage.unwrap_or(0),
        deadliness: weapon.deadliness + deadliness.unwrap_or(0),
    })
}

/// Zero or one matching effect; two or more is a conflict
fn single_effect<T>(
    effects: &[GripEffect],
    attribute: &'static str,
    select: impl Fn(&GripEffect) -> Option<T>,
) -> std::result::Result<Option<T>, OverlayConflict> {
    let mut matches = effects.iter().filter_map(select);
    let first = matches.next();

    if matches.next().is_some() {
        return Err(OverlayConflict { attribute });
    }

    Ok(first)
}

fn extract(document: &str) -> Result<Vec<RowBatch>> {
    let categories: Vec<WeaponCategory> = decode_records(NAME, document)?;

    let mut weapons = RowBatch::new(&WEAPONS);
    let mut qualities = RowBatch::new(&WEAPON_QUALITIES);

    for category in categories {
        let entries: Vec<Weapon> =
            decode_entries(NAME, Some(category.name.as_str()), category.entries)?;

        for weapon in &entries {
            for grip in &weapon.grips {
                let profile = resolve_grip(weapon, grip).map_err(|conflict| {
                    LoadError::malformed(
                        NAME,
                        Some(format!("{} / {} / {}", category.name, weapon.name, grip.name)),
                        format!("grip has more than one {} effect", conflict.attribute),
                    )
                })?;

                weapons.push(row![
                    &category.name,
                    &weapon.name,
                    &weapon.reference.book,
                    weapon.reference.page,
                    profile.skill,
                    &grip.name,
                    profile.range.min,
                    profile.range.max,
                    profile.damage,
                    profile.deadliness,
                    weapon.rarity,
                    weapon.price.value,
                    &weapon.price.unit,
                ]);
                qualities.extend(grip.qualities().map(|q| row![&weapon.name, &grip.name, q]));
            }

            qualities.extend(
                weapon
                    .qualities
                    .iter()
                    .map(|q| row![&weapon.name, None::<&str>, q]),
            );
        }
    }

    Ok(vec![weapons, qualities])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SqlValue;

    fn katana(grips: serde_json::Value) -> Weapon {
        serde_json::from_value(serde_json::json!({
            "name": "Katana",
            "reference": {"book": "Core", "page": 237},
            "skill": "Blades",
            "range": {"min": 0, "max": 1},
            "damage": 3,
            "deadliness": 5,
            "rarity": 7,
            "price": {"value": 15, "unit": "koku"},
            "qualities": ["Ceremonial", "Razor-Edged"],
            "grips": grips,
        }))
        .unwrap()
    }

    #[test]
    fn test_grip_without_effects_keeps_base_profile() {
        let weapon = katana(serde_json::json!([{"name": "1-handed", "effects": []}]));
        let profile = resolve_grip(&weapon, &weapon.grips[0]).unwrap();
        assert_eq!(profile, weapon.base_profile());
    }

    #[test]
    fn test_damage_and_deadliness_are_additive() {
        let weapon = katana(serde_json::json!([{
            "name": "2-handed",
            "effects": [
                {"attribute": "damage", "value_increase": 2},
                {"attribute": "deadliness", "value_increase": 1}
            ]
        }]));
        let profile = resolve_grip(&weapon, &weapon.grips[0]).unwrap();
        assert_eq!(profile.damage, 5);
        assert_eq!(profile.deadliness, 6);
        assert_eq!(profile.skill, "Blades");
    }

    #[test]
    fn test_skill_and_range_replace_base() {
        let weapon = katana(serde_json::json!([{
            "name": "Meditative",
            "effects": [
                {"attribute": "skill", "value": "Meditation"},
                {"attribute": "range", "value": {"min": 1, "max": 2}}
            ]
        }]));
        let profile = resolve_grip(&weapon, &weapon.grips[0]).unwrap();
        assert_eq!(profile.skill, "Meditation");
        assert_eq!(profile.range, Bounds { min: 1, max: 2 });
        assert_eq!(profile.damage, 3);
    }

    #[test]
    fn test_duplicate_overlay_is_a_conflict() {
        let weapon = katana(serde_json::json!([{
            "name": "2-handed",
            "effects": [
                {"attribute": "damage", "value_increase": 1},
                {"attribute": "damage", "value_increase": 2}
            ]
        }]));
        assert_eq!(
            resolve_grip(&weapon, &weapon.grips[0]),
            Err(OverlayConflict { attribute: "damage" })
        );
    }

    #[test]
    fn test_unknown_attribute_is_ignored() {
        let weapon = katana(serde_json::json!([{
            "name": "1-handed",
            "effects": [{"attribute": "stance", "value": "Air"}]
        }]));
        assert_eq!(weapon.grips[0].effects, vec![GripEffect::Other]);
        assert_eq!(resolve_grip(&weapon, &weapon.grips[0]).unwrap(), weapon.base_profile());
    }

    #[test]
    fn test_extract_rows_and_qualities() {
        let document = serde_json::json!([{
            "name": "Swords",
            "entries": [{
                "name": "Katana",
                "reference": {"book": "Core", "page": 237},
                "skill": "Blades",
                "range": {"min": 0, "max": 1},
                "damage": 3,
                "deadliness": 5,
                "rarity": 7,
                "price": {"value": 15, "unit": "koku"},
                "qualities": ["Ceremonial"],
                "grips": [
                    {"name": "1-handed", "effects": []},
                    {"name": "2-handed", "effects": [
                        {"attribute": "deadliness", "value_increase": 2},
                        {"attribute": "quality", "value": "Cumbersome"}
                    ]}
                ]
            }]
        }])
        .to_string();

        let batches = extract(&document).unwrap();
        let weapons = &batches[0].rows;
        let qualities = &batches[1].rows;

        assert_eq!(weapons.len(), 2);
        assert_eq!(
            weapons[1],
            row![
                "Swords", "Katana", "Core", 237_i64, "Blades", "2-handed", 0_i64, 1_i64, 3_i64,
                7_i64, 7_i64, 15_i64, "koku",
            ]
        );
        assert_eq!(
            *qualities,
            vec![
                row!["Katana", "2-handed", "Cumbersome"],
                vec![SqlValue::from("Katana"), SqlValue::Null, SqlValue::from("Ceremonial")],
            ]
        );
    }

    #[test]
    fn test_conflict_names_grip() {
        let document = serde_json::json!([{
            "name": "Swords",
            "entries": [{
                "name": "Katana",
                "reference": {"book": "Core", "page": 237},
                "skill": "Blades",
                "range": {"min": 0, "max": 1},
                "damage": 3,
                "deadliness": 5,
                "rarity": 7,
                "price": {"value": 15, "unit": "koku"},
                "qualities": [],
                "grips": [{"name": "Odd", "effects": [
                    {"attribute": "skill", "value": "Martial Arts [Melee]"},
                    {"attribute": "skill", "value": "Meditation"}
                ]}]
            }]
        }])
        .to_string();

        match extract(&document).unwrap_err() {
            LoadError::MalformedInput { entity, message, .. } => {
                assert_eq!(entity.as_deref(), Some("Swords / Katana / Odd"));
                assert_eq!(message, "grip has more than one skill effect");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
