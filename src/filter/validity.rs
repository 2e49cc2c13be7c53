//! Completeness and type checks for a filter under construction.
//!
//! A filter yields at most one diagnostic, picked in priority order:
//! missing field, missing operator, missing value, value/type mismatch,
//! operator-specific incompleteness, and finally a generic message.

use serde::Serialize;
use serde_json::Value;

use crate::model::{FieldDataType, FilterOperator, FilterValue, SelectedField};

use super::operators::{is_operator_allowed, requires_value, value_shape, ValueShape};
use super::values::{is_blank, is_value_valid_for_type, matches_shape, split_list};

pub const SELECT_FIELD: &str = "Select a field";
pub const SELECT_OPERATOR: &str = "Select an operator";
pub const ENTER_VALUE: &str = "Enter a value";
pub const INVALID_NUMBER: &str = "Please enter a valid number (letters are not allowed)";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const INVALID_VALUE: &str = "Please enter a valid value";
pub const ENTER_START: &str = "Enter start value";
pub const ENTER_END: &str = "Enter end value";
pub const ENTER_LIST_VALUE: &str = "Enter at least one value";
pub const INCOMPLETE: &str = "Please complete all required fields";

/// Outcome of checking a filter: validity plus the diagnostic to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

fn type_mismatch_message(field_type: FieldDataType) -> &'static str {
    if field_type.is_numeric() {
        INVALID_NUMBER
    } else if field_type.is_date() {
        INVALID_DATE
    } else {
        INVALID_VALUE
    }
}

fn is_missing(operator: FilterOperator, value: Option<&FilterValue>) -> bool {
    match value {
        None => true,
        Some(FilterValue::Scalar(v)) => {
            v.is_null() || (value_shape(operator) == ValueShape::Scalar && is_blank(v))
        }
        Some(_) => false,
    }
}

fn incompleteness(operator: FilterOperator, value: &FilterValue) -> Option<&'static str> {
    let bound_missing = |bound: &Option<Value>| bound.as_ref().map_or(true, Value::is_null);

    match (value_shape(operator), value) {
        (ValueShape::Range, FilterValue::Range(range)) if bound_missing(&range.start) => Some(ENTER_START),
        (ValueShape::Range, FilterValue::Range(range)) if bound_missing(&range.end) => Some(ENTER_END),
        (ValueShape::List, FilterValue::List(items)) if items.is_empty() => Some(ENTER_LIST_VALUE),
        (ValueShape::List, FilterValue::Scalar(Value::String(s))) if split_list(s).is_empty() => {
            Some(ENTER_LIST_VALUE)
        }
        _ => None,
    }
}

/// Check a filter's parts and return the single most relevant diagnostic.
pub fn validate_filter(
    field: Option<&SelectedField>,
    operator: Option<FilterOperator>,
    value: Option<&FilterValue>,
) -> ValidationResult {
    let Some(field) = field else {
        return ValidationResult::invalid(SELECT_FIELD);
    };
    let Some(operator) = operator.filter(|op| is_operator_allowed(field.data_type, *op)) else {
        return ValidationResult::invalid(SELECT_OPERATOR);
    };
    if !requires_value(operator) {
        return ValidationResult::valid();
    }
    if is_missing(operator, value) {
        return ValidationResult::invalid(ENTER_VALUE);
    }
    let Some(value) = value else {
        return ValidationResult::invalid(ENTER_VALUE);
    };

    if !matches_shape(operator, value) {
        return ValidationResult::invalid(INCOMPLETE);
    }
    if !is_value_valid_for_type(field.data_type, operator, value) {
        return ValidationResult::invalid(type_mismatch_message(field.data_type));
    }
    match incompleteness(operator, value) {
        Some(message) => ValidationResult::invalid(message),
        None => ValidationResult::valid(),
    }
}

pub fn is_filter_valid(
    field: Option<&SelectedField>,
    operator: Option<FilterOperator>,
    value: Option<&FilterValue>,
) -> bool {
    validate_filter(field, operator, value).is_valid
}
