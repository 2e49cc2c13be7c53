//! Operator legality and value shapes per field type.

use crate::model::{FieldDataType, FilterOperator, FilterValue, ValueRange};

const BASE_OPERATORS: [FilterOperator; 2] = [FilterOperator::Equals, FilterOperator::NotEquals];

/// Operators offered for a field of type `field_type`, in display order.
///
/// - every type: `equals`, `not_equals`
/// - `string`: + `contains`, `starts_with`, `in_list`
/// - numeric types: + `greater_than`, `less_than`, `between`, `in_list`
/// - `date`: + `greater_than`, `less_than`, `between`
pub fn available_operators(field_type: FieldDataType) -> Vec<FilterOperator> {
    let mut operators = BASE_OPERATORS.to_vec();

    if field_type == FieldDataType::String {
        operators.extend([
            FilterOperator::Contains,
            FilterOperator::StartsWith,
            FilterOperator::InList,
        ]);
    } else if field_type.is_numeric() {
        operators.extend([
            FilterOperator::GreaterThan,
            FilterOperator::LessThan,
            FilterOperator::Between,
            FilterOperator::InList,
        ]);
    } else if field_type.is_date() {
        operators.extend([
            FilterOperator::GreaterThan,
            FilterOperator::LessThan,
            FilterOperator::Between,
        ]);
    }

    operators
}

pub fn is_operator_allowed(field_type: FieldDataType, operator: FilterOperator) -> bool {
    available_operators(field_type).contains(&operator)
}

/// Operator assigned when a field is first chosen for a filter.
pub fn default_operator(field_type: FieldDataType) -> FilterOperator {
    match field_type {
        FieldDataType::String => FilterOperator::Contains,
        _ => FilterOperator::Equals,
    }
}

/// Every operator currently compares against a value.
pub fn requires_value(_operator: FilterOperator) -> bool {
    true
}

/// Shape of the value an operator compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    /// `{start, end}`
    Range,
    List,
}

pub fn value_shape(operator: FilterOperator) -> ValueShape {
    match operator {
        FilterOperator::Between => ValueShape::Range,
        FilterOperator::InList => ValueShape::List,
        _ => ValueShape::Scalar,
    }
}

/// Value freshly initialized when an operator is chosen.
pub fn initial_value(operator: FilterOperator) -> Option<FilterValue> {
    match value_shape(operator) {
        ValueShape::Range => Some(FilterValue::Range(ValueRange::default())),
        ValueShape::List => Some(FilterValue::List(Vec::new())),
        ValueShape::Scalar => None,
    }
}

/// Input control a UI should render for the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
    Boolean,
    NumberRange,
    DateRange,
    /// Discrete options are known.
    MultiSelect,
    /// Free-text comma-separated values.
    CsvText,
}

pub fn input_kind(field_type: FieldDataType, operator: FilterOperator, has_options: bool) -> InputKind {
    match value_shape(operator) {
        ValueShape::Range if field_type.is_date() => InputKind::DateRange,
        ValueShape::Range => InputKind::NumberRange,
        ValueShape::List if has_options => InputKind::MultiSelect,
        ValueShape::List => InputKind::CsvText,
        ValueShape::Scalar if field_type.is_date() => InputKind::Date,
        ValueShape::Scalar if field_type.is_numeric() => InputKind::Number,
        ValueShape::Scalar if field_type == FieldDataType::Boolean => InputKind::Boolean,
        ValueShape::Scalar => InputKind::Text,
    }
}
