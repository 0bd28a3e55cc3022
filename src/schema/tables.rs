//! Table schema definitions for the Paper Blossoms database

use super::types::*;

use super::types::ColumnType::{Boolean, Integer, Text};

// =============================================================================
// Descriptions
// =============================================================================

pub static USER_DESCRIPTIONS: TableSchema = TableSchema {
    name: DESCRIPTIONS_TABLE,
    layout: TableLayout::Standalone,
    columns: &[
        Column::required("name", Text),
        Column::new("description", Text),
        Column::new("short_desc", Text),
    ],
    primary_key: &["name"],
    merge_key: None,
    description_joins: &[],
};

// =============================================================================
// Simple Tables
// =============================================================================

pub static RINGS: TableSchema = TableSchema {
    name: "rings",
    layout: TableLayout::Standalone,
    columns: &[
        Column::required("name", Text),
        Column::required("outstanding_quality", Text),
    ],
    primary_key: &["name"],
    merge_key: None,
    description_joins: &[],
};

pub static SKILLS: TableSchema = TableSchema {
    name: "skills",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("skill_group", Text),
        Column::required("skill", Text),
    ],
    primary_key: &["skill"],
    merge_key: None,
    description_joins: &[],
};

pub static TECHNIQUES: TableSchema = TableSchema {
    name: "techniques",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("category", Text),
        Column::required("subcategory", Text),
        Column::required("name", Text),
        Column::new("restriction", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("rank", Integer),
        Column::required("xp", Integer),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static ADVANTAGES_DISADVANTAGES: TableSchema = TableSchema {
    name: "advantages_disadvantages",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("category", Text),
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("ring", Text),
        Column::required("types", Text),
        Column::required("effects", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static UNORTHODOX_SKILLS: TableSchema = TableSchema {
    name: "base_unorthodox_skills",
    layout: TableLayout::Standalone,
    columns: &[Column::required("skill", Text)],
    primary_key: &["skill"],
    merge_key: None,
    description_joins: &[],
};

pub static TITLES: TableSchema = TableSchema {
    name: "titles",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("base_status_award", Integer),
        Column::new("status_award_constraint_type", Text),
        Column::new("status_award_constraint_value", Integer),
        Column::new("status_award_constraint_min", Integer),
        Column::new("status_award_constraint_max", Integer),
        Column::required("xp_to_completion", Integer),
        Column::required("title_ability_name", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[DescriptionJoin::new("title_ability_name", "title_ability")],
};

pub static TITLE_ADVANCEMENTS: TableSchema = TableSchema {
    name: "title_advancements",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("title", Text),
        Column::new("rank", Integer),
        Column::required("name", Text),
        Column::required("type", Text),
        Column::required("special_access", Boolean),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static ITEM_PATTERNS: TableSchema = TableSchema {
    name: "item_patterns",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("xp_cost", Integer),
        Column::required("rarity_modifier", Integer),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

// =============================================================================
// Equipment
// =============================================================================

pub static QUALITIES: TableSchema = TableSchema {
    name: "qualities",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("quality", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
    ],
    primary_key: &["quality"],
    merge_key: Some("quality"),
    description_joins: &[],
};

pub static PERSONAL_EFFECTS: TableSchema = TableSchema {
    name: "personal_effects",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::new("price_value", Integer),
        Column::new("price_unit", Text),
        Column::new("rarity", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static PERSONAL_EFFECT_QUALITIES: TableSchema = TableSchema {
    name: "personal_effect_qualities",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("personal_effect", Text),
        Column::required("quality", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static ARMOR: TableSchema = TableSchema {
    name: "armor",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("rarity", Integer),
        Column::required("price_value", Integer),
        Column::required("price_unit", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static ARMOR_RESISTANCE: TableSchema = TableSchema {
    name: "armor_resistance",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("armor", Text),
        Column::required("resistance_category", Text),
        Column::required("resistance_value", Integer),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static ARMOR_QUALITIES: TableSchema = TableSchema {
    name: "armor_qualities",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("armor", Text),
        Column::required("quality", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static WEAPONS: TableSchema = TableSchema {
    name: "weapons",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("category", Text),
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("skill", Text),
        Column::required("grip", Text),
        Column::required("range_min", Integer),
        Column::required("range_max", Integer),
        Column::required("damage", Integer),
        Column::required("deadliness", Integer),
        Column::required("rarity", Integer),
        Column::required("price_value", Integer),
        Column::required("price_unit", Text),
    ],
    primary_key: &["name", "grip"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static WEAPON_QUALITIES: TableSchema = TableSchema {
    name: "weapon_qualities",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("weapon", Text),
        // NULL for qualities every grip shares
        Column::new("grip", Text),
        Column::required("quality", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

// =============================================================================
// Clans and Heritage
// =============================================================================

pub static CLANS: TableSchema = TableSchema {
    name: "clans",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("type", Text),
        Column::required("ring", Text),
        Column::required("skill", Text),
        Column::required("status", Integer),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static FAMILIES: TableSchema = TableSchema {
    name: "families",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("clan", Text),
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("glory", Text),
        Column::required("wealth", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[],
};

pub static FAMILY_RINGS: TableSchema = TableSchema {
    name: "family_rings",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("family", Text),
        Column::required("ring", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static FAMILY_SKILLS: TableSchema = TableSchema {
    name: "family_skills",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("family", Text),
        Column::required("skill", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static SAMURAI_HERITAGE: TableSchema = TableSchema {
    name: "samurai_heritage",
    layout: TableLayout::Standalone,
    columns: &[
        Column::required("source", Text),
        Column::required("roll_min", Integer),
        Column::required("roll_max", Integer),
        Column::required("ancestor", Text),
        Column::required("modifier_glory", Integer),
        Column::required("modifier_honor", Integer),
        Column::required("modifier_status", Integer),
        Column::required("effect_type", Text),
        Column::required("effect_instructions", Text),
    ],
    primary_key: &["ancestor"],
    merge_key: None,
    description_joins: &[],
};

pub static HERITAGE_EFFECTS: TableSchema = TableSchema {
    name: "heritage_effects",
    layout: TableLayout::Standalone,
    columns: &[
        Column::required("ancestor", Text),
        Column::new("roll_min", Integer),
        Column::new("roll_max", Integer),
        Column::required("outcome", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

// =============================================================================
// Schools
// =============================================================================

pub static SCHOOLS: TableSchema = TableSchema {
    name: "schools",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("name", Text),
        Column::required("reference_book", Text),
        Column::required("reference_page", Integer),
        Column::required("role", Text),
        Column::new("clan", Text),
        Column::required("starting_skills_size", Integer),
        Column::required("honor", Integer),
        Column::new("advantage_disadvantage", Text),
        Column::required("school_ability_name", Text),
        Column::required("mastery_ability_name", Text),
    ],
    primary_key: &["name"],
    merge_key: Some("name"),
    description_joins: &[
        DescriptionJoin::new("school_ability_name", "school_ability"),
        DescriptionJoin::new("mastery_ability_name", "mastery_ability"),
    ],
};

pub static SCHOOL_RINGS: TableSchema = TableSchema {
    name: "school_rings",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("ring", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static SCHOOL_STARTING_SKILLS: TableSchema = TableSchema {
    name: "school_starting_skills",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("skill", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static SCHOOL_TECHNIQUES_AVAILABLE: TableSchema = TableSchema {
    name: "school_techniques_available",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("technique", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static SCHOOL_STARTING_TECHNIQUES: TableSchema = TableSchema {
    name: "school_starting_techniques",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("set_id", Integer),
        Column::required("set_size", Integer),
        Column::required("technique", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static SCHOOL_STARTING_OUTFIT: TableSchema = TableSchema {
    name: "school_starting_outfit",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("set_id", Integer),
        Column::required("set_size", Integer),
        Column::required("equipment", Text),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

pub static CURRICULUM: TableSchema = TableSchema {
    name: "curriculum",
    layout: TableLayout::Paired,
    columns: &[
        Column::required("school", Text),
        Column::required("rank", Integer),
        Column::required("advance", Text),
        Column::required("type", Text),
        Column::required("special_access", Boolean),
    ],
    primary_key: &[],
    merge_key: None,
    description_joins: &[],
};

// =============================================================================
// Schema Registry
// =============================================================================

/// All table schemas in creation order
pub static ALL_TABLES: &[&TableSchema] = &[
    &USER_DESCRIPTIONS,
    &RINGS,
    &SKILLS,
    &TECHNIQUES,
    &ADVANTAGES_DISADVANTAGES,
    &UNORTHODOX_SKILLS,
    &TITLES,
    &TITLE_ADVANCEMENTS,
    &ITEM_PATTERNS,
    &QUALITIES,
    &PERSONAL_EFFECTS,
    &PERSONAL_EFFECT_QUALITIES,
    &ARMOR,
    &ARMOR_RESISTANCE,
    &ARMOR_QUALITIES,
    &WEAPONS,
    &WEAPON_QUALITIES,
    &CLANS,
    &FAMILIES,
    &FAMILY_RINGS,
    &FAMILY_SKILLS,
    &SAMURAI_HERITAGE,
    &HERITAGE_EFFECTS,
    &SCHOOLS,
    &SCHOOL_RINGS,
    &SCHOOL_STARTING_SKILLS,
    &SCHOOL_TECHNIQUES_AVAILABLE,
    &SCHOOL_STARTING_TECHNIQUES,
    &SCHOOL_STARTING_OUTFIT,
    &CURRICULUM,
];

/// Get table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_names_are_unique() {
        let names = table_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_keys_reference_declared_columns() {
        for table in ALL_TABLES {
            for key in table.primary_key {
                assert!(
                    table.column_index(key).is_some(),
                    "{}: unknown key column {}",
                    table.name,
                    key
                );
            }
            if let Some(merge_key) = table.merge_key {
                assert!(table.column_index(merge_key).is_some(), "{}", table.name);
            }
            for join in table.description_joins {
                assert!(table.column_index(join.column).is_some(), "{}", table.name);
            }
        }
    }

    #[test]
    fn test_get_table() {
        assert_eq!(get_table("weapons").map(|t| t.primary_key), Some(&["name", "grip"][..]));
        assert!(get_table("nonexistent").is_none());
    }
}
