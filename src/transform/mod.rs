//! Model transform utilities.
//!
//! Pure functions used at storage and transport boundaries: copying and
//! merging data sources, connection descriptors, report projections and
//! schema aggregates, plus reference reconciliation.

mod connection;
mod datasource;
mod reconcile;
mod report;
mod schema;

pub use connection::{create_connection_string, Engine};
pub use datasource::{
    clone_data_source_info, merge_data_source_info, normalize_data_source_info,
    normalize_data_source_info_with,
};
pub use reconcile::{reconcile_references, reconcile_report, resolve_field, Rebind};
pub use report::{
    extract_table_names, get_aggregated_fields, get_group_fields, has_aggregated_fields,
    serialize_report_definition, SerializedDataSource, SerializedReport,
};
pub use schema::{count_schema_columns, get_tables_with_foreign_keys, get_unique_data_types};
