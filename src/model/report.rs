// src/model/report.rs
use inflector::Inflector;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::datasource::DataSourceInfo;
use super::normalize::normalize_type;
use super::schema::ColumnInfo;
use super::types::{AggregationType, FieldDataType, FilterOperator, SortDirection};

/// A saved ad-hoc report definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `None` while a report is being assembled; serialized as `null`.
    #[serde(default)]
    pub data_source: Option<DataSourceInfo>,
    #[serde(default)]
    pub selected_fields: Vec<SelectedField>,
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
    #[serde(default)]
    pub group_by: Vec<GroupByField>,
    #[serde(default)]
    pub sorting: Vec<SortField>,
    /// Presentation settings; opaque to this crate.
    #[serde(default)]
    pub layout: Map<String, Value>,
    #[serde(default)]
    pub parameters: Vec<ReportParameter>,
}

impl ReportDefinition {
    /// Structural validation of the serialized form.
    pub fn validate(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(value) => crate::validation::validate_report_definition(&value),
            Err(e) => vec![format!("ReportDefinition could not be serialized: {}", e)],
        }
    }

    pub fn field(&self, id: &str) -> Option<&SelectedField> {
        self.selected_fields.iter().find(|f| f.id == id)
    }
}

/// A column chosen for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedField {
    /// Caller-assigned join key, conventionally `table.field`.
    pub id: String,
    pub table_name: String,
    pub field_name: String,
    pub display_name: String,
    pub data_type: FieldDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting: Option<Map<String, Value>>,
}

impl SelectedField {
    pub fn new(
        table_name: impl Into<String>,
        field_name: impl Into<String>,
        data_type: FieldDataType,
    ) -> Self {
        let table_name = table_name.into();
        let field_name = field_name.into();
        Self {
            id: format!("{}.{}", table_name, field_name),
            display_name: field_name.to_title_case(),
            table_name,
            field_name,
            data_type,
            aggregation: None,
            formatting: None,
        }
    }

    /// Build a field for a schema column, normalizing its raw type when the
    /// column has not been normalized yet.
    pub fn from_column(table_name: &str, column: &ColumnInfo) -> Self {
        let data_type = column
            .normalized_type
            .unwrap_or_else(|| normalize_type(&column.data_type));
        Self::new(table_name, column.name.as_str(), data_type)
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationType) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn validate(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(value) => crate::validation::validate_selected_field(&value),
            Err(e) => vec![format!("SelectedField could not be serialized: {}", e)],
        }
    }
}

/// A `{start, end}` pair for the `between` operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub start: Option<Value>,
    #[serde(default)]
    pub end: Option<Value>,
}

impl ValueRange {
    pub fn new(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Value of a filter condition; its shape follows the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// `in_list` entered as discrete values
    List(Vec<Value>),
    /// `between`
    Range(ValueRange),
    /// Every other operator, and `in_list` entered as comma-separated text.
    Scalar(Value),
}

impl FilterValue {
    pub fn scalar(value: impl Into<Value>) -> Self {
        FilterValue::Scalar(value.into())
    }

    pub fn range(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        FilterValue::Range(ValueRange::new(start, end))
    }

    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub id: String,
    pub field: SelectedField,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Option<FilterValue>,
    /// Derived from field, operator and value; never authoritative.
    #[serde(default)]
    pub display_text: String,
}

impl FilterCondition {
    pub fn validate(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(value) => crate::validation::validate_filter_condition(&value),
            Err(e) => vec![format!("FilterCondition could not be serialized: {}", e)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortField {
    pub id: String,
    pub table_name: String,
    pub field_name: String,
    pub display_name: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    pub fn for_field(field: &SelectedField, direction: SortDirection) -> Self {
        Self {
            id: field.id.clone(),
            table_name: field.table_name.clone(),
            field_name: field.field_name.clone(),
            display_name: field.display_name.clone(),
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupByField {
    pub id: String,
    pub table_name: String,
    pub field_name: String,
    pub display_name: String,
}

impl GroupByField {
    pub fn for_field(field: &SelectedField) -> Self {
        Self {
            id: field.id.clone(),
            table_name: field.table_name.clone(),
            field_name: field.field_name.clone(),
            display_name: field.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParameter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Anything that points at a selected field by value.
///
/// References are resolved by `id` first, then by `(tableName, fieldName)`;
/// see [`resolve_field`](crate::transform::resolve_field).
pub trait FieldReference {
    fn field_id(&self) -> &str;
    fn table_name(&self) -> &str;
    fn field_name(&self) -> &str;

    /// Same underlying column as `other`.
    fn same_column<R: FieldReference + ?Sized>(&self, other: &R) -> bool {
        self.table_name() == other.table_name() && self.field_name() == other.field_name()
    }
}

macro_rules! impl_field_reference {
    ($($ty:ty),*) => {
        $(
            impl FieldReference for $ty {
                fn field_id(&self) -> &str {
                    &self.id
                }

                fn table_name(&self) -> &str {
                    &self.table_name
                }

                fn field_name(&self) -> &str {
                    &self.field_name
                }
            }
        )*
    };
}

impl_field_reference!(SelectedField, SortField, GroupByField);
