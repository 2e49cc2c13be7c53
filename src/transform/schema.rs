//! Aggregate queries over an introspected schema.

use crate::model::SchemaInfo;

pub fn count_schema_columns(schema: &SchemaInfo) -> usize {
    schema.tables.iter().map(|t| t.columns.len()).sum()
}

/// Distinct raw `dataType` and `normalizedType` strings across all columns, in
/// order of first appearance.
pub fn get_unique_data_types(schema: &SchemaInfo) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    let mut push = |t: &str| {
        if !types.iter().any(|seen| seen == t) {
            types.push(t.to_string());
        }
    };

    for column in schema.tables.iter().flat_map(|t| t.columns.iter()) {
        push(&column.data_type);
        if let Some(normalized) = column.normalized_type {
            push(normalized.as_str());
        }
    }
    types
}

/// Names of tables with at least one foreign-key column.
pub fn get_tables_with_foreign_keys(schema: &SchemaInfo) -> Vec<String> {
    schema
        .tables
        .iter()
        .filter(|t| t.has_foreign_keys())
        .map(|t| t.name.clone())
        .collect()
}
