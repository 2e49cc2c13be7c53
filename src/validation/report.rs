use serde_json::Value;

use super::{
    is_aggregation_type, is_field_data_type, is_filter_operator, is_sort_direction,
    validate_data_source_info, ObjectChecker,
};
use crate::model::FilterOperator;

/// Validate a complete report definition, recursing into every nested entity.
pub fn validate_report_definition(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "ReportDefinition") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.optional_string("id");
    c.required_non_empty_string("name");
    c.optional_string("description");
    c.nested("dataSource", validate_data_source_info, true);
    c.array_of("selectedFields", validate_selected_field, true);
    c.array_of("filters", validate_filter_condition, true);
    c.array_of("groupBy", validate_group_by_field, true);
    c.array_of("sorting", validate_sort_field, true);
    if !c.get("layout").is_some_and(Value::is_object) {
        c.error("layout is required and must be an object");
    }
    c.array_of("parameters", validate_report_parameter, true);

    c.finish()
}

pub fn validate_selected_field(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "SelectedField") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    for key in ["id", "tableName", "fieldName", "displayName"] {
        c.required_string(key);
    }
    c.member_of("dataType", "FieldDataType", is_field_data_type, true);
    c.member_of("aggregation", "AggregationType", is_aggregation_type, false);
    c.optional_object("formatting");

    c.finish()
}

/// Validate a filter condition.
///
/// `field` is validated as a full selected field. The value shape is checked
/// only once the operator itself is valid.
pub fn validate_filter_condition(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "FilterCondition") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_string("id");
    c.nested("field", validate_selected_field, true);
    c.member_of("operator", "FilterOperator", is_filter_operator, true);

    let operator = c
        .get("operator")
        .and_then(Value::as_str)
        .and_then(FilterOperator::from_str);
    if let (Some(operator), Some(value)) = (operator, c.get("value")) {
        if let Some(message) = value_shape_error(operator, value) {
            c.error(message);
        }
    }

    c.optional_string("displayText");

    c.finish()
}

fn value_shape_error(operator: FilterOperator, value: &Value) -> Option<String> {
    if value.is_null() {
        return None;
    }
    match operator {
        FilterOperator::Between => {
            let ok = value
                .as_object()
                .is_some_and(|obj| obj.contains_key("start") && obj.contains_key("end"));
            (!ok).then(|| {
                "value must be an object with start and end for operator between".to_string()
            })
        }
        FilterOperator::InList => (!value.is_array() && !value.is_string()).then(|| {
            "value must be an array or a comma-separated string for operator in_list".to_string()
        }),
        _ => (value.is_array() || value.is_object())
            .then(|| format!("value must be a single value for operator {}", operator)),
    }
}

pub fn validate_sort_field(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "SortField") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    for key in ["id", "tableName", "fieldName", "displayName"] {
        c.required_string(key);
    }
    if !c.get("direction").is_some_and(is_sort_direction) {
        c.error("direction must be either 'asc' or 'desc'");
    }

    c.finish()
}

pub fn validate_group_by_field(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "GroupByField") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    for key in ["id", "tableName", "fieldName", "displayName"] {
        c.required_string(key);
    }

    c.finish()
}

pub fn validate_report_parameter(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "ReportParameter") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_string("id");
    c.required_non_empty_string("name");
    c.required_string("type");
    c.optional_bool("required");
    c.optional_string("displayName");

    c.finish()
}
