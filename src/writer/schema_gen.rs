use crate::schema::{TableSchema, DESCRIPTIONS_TABLE};

/// Generate CREATE TABLE SQL for one physical table of a schema
pub fn generate_create_table(schema: &TableSchema, table_name: &str) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", table_name);
    let mut columns = Vec::new();

    let inline_key = match schema.primary_key {
        [single] => Some(*single),
        _ => None,
    };

    for col in schema.columns {
        let pk = if inline_key == Some(col.name) {
            " PRIMARY KEY"
        } else {
            ""
        };
        columns.push(format!("    {} {}{}", col.name, col.col_type.sql_type(), pk));
    }

    if schema.primary_key.len() > 1 {
        columns.push(format!("    PRIMARY KEY ({})", schema.primary_key.join(", ")));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate CREATE VIEW SQL merging the base and user tables.
///
/// Returns `None` for standalone tables.
pub fn generate_create_view(schema: &TableSchema) -> Option<String> {
    let view = schema.view_name()?;
    let base = schema.base_table();
    let user = schema.user_table()?;

    let union = format!(
        "SELECT * FROM {}\n    UNION ALL\n    SELECT * FROM {}",
        base, user
    );

    if schema.merge_key.is_none() && schema.description_joins.is_empty() {
        return Some(format!("CREATE VIEW {} AS\n    {}", view, union));
    }

    let mut select = vec!["t.*".to_string()];
    let mut joins = Vec::new();

    if let Some(key) = schema.merge_key {
        select.push("d.description".to_string());
        select.push("d.short_desc".to_string());
        joins.push(format!(
            "LEFT JOIN {} d\n    ON t.{} = d.name",
            DESCRIPTIONS_TABLE, key
        ));
    }

    for join in schema.description_joins {
        let alias = format!("{}_desc", join.prefix);
        select.push(format!("{}.description AS {}_description", alias, join.prefix));
        select.push(format!("{}.short_desc AS {}_short_desc", alias, join.prefix));
        joins.push(format!(
            "LEFT JOIN {} {}\n    ON t.{} = {}.name",
            DESCRIPTIONS_TABLE, alias, join.column, alias
        ));
    }

    Some(format!(
        "CREATE VIEW {} AS\nSELECT\n    {}\nFROM (\n    {}\n) t\n{}",
        view,
        select.join(",\n    "),
        union,
        joins.join("\n")
    ))
}
