//! Queries and projections over report definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{
    DataSourceInfo, FilterCondition, GroupByField, ReportDefinition, ReportParameter,
    SelectedField, SortField,
};

/// Tables referenced by the selected fields, grouping and sorting, in order of
/// first appearance, without duplicates. Empty table names are skipped.
pub fn extract_table_names(report: &ReportDefinition) -> Vec<String> {
    let referenced = report
        .selected_fields
        .iter()
        .map(|f| f.table_name.as_str())
        .chain(report.group_by.iter().map(|g| g.table_name.as_str()))
        .chain(report.sorting.iter().map(|s| s.table_name.as_str()));

    let mut tables: Vec<String> = Vec::new();
    for table in referenced {
        if !table.is_empty() && !tables.iter().any(|t| t == table) {
            tables.push(table.to_string());
        }
    }
    tables
}

pub fn has_aggregated_fields(report: &ReportDefinition) -> bool {
    report.selected_fields.iter().any(|f| f.aggregation.is_some())
}

pub fn get_aggregated_fields(report: &ReportDefinition) -> Vec<&SelectedField> {
    report
        .selected_fields
        .iter()
        .filter(|f| f.aggregation.is_some())
        .collect()
}

/// Selected fields whose id is also used for grouping.
pub fn get_group_fields(report: &ReportDefinition) -> Vec<&SelectedField> {
    report
        .selected_fields
        .iter()
        .filter(|f| report.group_by.iter().any(|g| g.id == f.id))
        .collect()
}

/// Data source properties safe to store or send: no password, no schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedDataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: String,
    pub server: String,
    #[serde(
        default,
        deserialize_with = "crate::model::datasource::deserialize_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u16>,
    pub database: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_schemas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_object_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_name_pattern: Option<String>,
}

impl From<&DataSourceInfo> for SerializedDataSource {
    fn from(ds: &DataSourceInfo) -> Self {
        Self {
            id: ds.id.clone(),
            name: ds.name.clone(),
            db_type: ds.db_type.clone(),
            server: ds.server.clone(),
            port: ds.port,
            database: ds.database.clone(),
            username: ds.username.clone(),
            included_schemas: ds.included_schemas.clone(),
            included_object_types: ds.included_object_types.clone(),
            object_name_pattern: ds.object_name_pattern.clone(),
        }
    }
}

/// Storage/transport projection of a report definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_source: Option<SerializedDataSource>,
    pub selected_fields: Vec<SelectedField>,
    pub filters: Vec<FilterCondition>,
    pub group_by: Vec<GroupByField>,
    pub sorting: Vec<SortField>,
    pub layout: Map<String, Value>,
    pub parameters: Vec<ReportParameter>,
}

/// Project `report` for storage: report metadata and lists are copied as is,
/// the data source is reduced to an allow-list without password and schema.
pub fn serialize_report_definition(report: &ReportDefinition) -> SerializedReport {
    tracing::trace!(report = %report.name, "serializing report definition");

    SerializedReport {
        id: report.id.clone(),
        name: report.name.clone(),
        description: report.description.clone(),
        data_source: report.data_source.as_ref().map(SerializedDataSource::from),
        selected_fields: report.selected_fields.clone(),
        filters: report.filters.clone(),
        group_by: report.group_by.clone(),
        sorting: report.sorting.clone(),
        layout: report.layout.clone(),
        parameters: report.parameters.clone(),
    }
}
