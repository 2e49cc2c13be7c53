//! Report definition model.
//!
//! Value types for everything a report is assembled from: the data source, its
//! introspected schema, the selected fields, filters, grouping, sorting and
//! parameters. All of them round-trip through serde using the camelCase wire
//! names the UI collaborator exchanges.

pub mod datasource;
pub mod normalize;
pub mod preview;
pub mod report;
pub mod schema;
pub mod types;

pub use datasource::{DataSourceInfo, PartialDataSourceInfo};
pub use normalize::{normalize_schema, normalize_type};
pub use preview::PreviewResult;
pub use report::{
    FieldReference, FilterCondition, FilterValue, GroupByField, ReportDefinition,
    ReportParameter, SelectedField, SortField, ValueRange,
};
pub use schema::{ColumnInfo, ColumnMapping, ForeignKeyReference, Relationship, SchemaInfo, TableInfo};
pub use types::{AggregationType, FieldDataType, FilterOperator, SortDirection};
