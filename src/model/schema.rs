//! Introspected database schema snapshot.

use serde::{Deserialize, Serialize};

use super::types::FieldDataType;

/// Tables and relationships discovered for a data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    pub tables: Vec<TableInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

impl TableInfo {
    pub fn has_foreign_keys(&self) -> bool {
        self.columns.iter().any(|c| c.is_foreign_key == Some(true))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    /// Engine-native type string, e.g. `varchar(50)`.
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_type: Option<FieldDataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_foreign_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key_reference: Option<ForeignKeyReference>,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyReference {
    pub referenced_table: String,
    pub referenced_column: String,
    pub constraint_name: String,
}

/// A declared or inferred join between two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub name: String,
    pub parent_table: String,
    pub child_table: String,
    pub column_mappings: Vec<ColumnMapping>,
    #[serde(rename = "type")]
    pub relationship_type: String,
    pub cardinality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub parent_column: String,
    pub child_column: String,
}
