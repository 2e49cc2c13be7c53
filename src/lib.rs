//! # reportkit
//!
//! Modeling, validation and filter resolution for ad-hoc report definitions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Schema introspection (raw engine types)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [model::normalize]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Model (SchemaInfo, SelectedField, ReportDefinition)    │
//! └─────────────────────────────────────────────────────────┘
//!            │                             │
//!            ▼ [filter]                    ▼ [validation]
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Operators, value shapes, │   │ Structural error lists   │
//! │ validity, display text   │   │ over untyped candidates  │
//! └──────────────────────────┘   └──────────────────────────┘
//!                          │
//!                          ▼ [transform]
//! ┌─────────────────────────────────────────────────────────┐
//! │  Storage projections, connection strings, aggregates     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything except [`config`] and [`loader`] is pure and synchronous:
//! validators return lists of messages and resolvers return diagnostics,
//! nothing in the core returns an error.

pub mod config;
pub mod filter;
pub mod loader;
pub mod model;
pub mod transform;
pub mod validation;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{DisplaySettings, Settings, SettingsError};
    pub use crate::filter::{
        available_operators, default_operator, describe_filter, is_filter_valid,
        is_value_valid_for_type, validate_filter, FilterDraft, ValidationResult, ValueShape,
    };
    pub use crate::loader::{load_document, LoadError};
    pub use crate::model::{
        normalize_schema, normalize_type, AggregationType, ColumnInfo, DataSourceInfo,
        FieldDataType, FilterCondition, FilterOperator, FilterValue, GroupByField,
        PartialDataSourceInfo, PreviewResult, ReportDefinition, ReportParameter, SchemaInfo,
        SelectedField, SortDirection, SortField, TableInfo,
    };
    pub use crate::transform::{
        clone_data_source_info, create_connection_string, merge_data_source_info,
        normalize_data_source_info, reconcile_report, serialize_report_definition,
    };
    pub use crate::validation::{
        validate_data_source_info, validate_filter_condition, validate_report_definition,
        validate_schema_info, validate_selected_field,
    };
}
