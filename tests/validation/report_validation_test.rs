//! Integration tests for report definition validation.

use reportkit::validation::{
    validate_filter_condition, validate_report_definition, validate_report_parameter,
    validate_selected_field, validate_sort_field,
};
use serde_json::{json, Value};

fn field() -> Value {
    json!({
        "id": "orders.total",
        "tableName": "orders",
        "fieldName": "total",
        "displayName": "Total",
        "dataType": "number"
    })
}

fn report() -> Value {
    json!({
        "name": "Totals",
        "dataSource": {
            "name": "T",
            "type": "mysql",
            "server": "h",
            "database": "d",
            "username": "u",
            "password": "p"
        },
        "selectedFields": [field()],
        "filters": [],
        "groupBy": [],
        "sorting": [],
        "layout": {},
        "parameters": []
    })
}

fn filter(operator: &str, value: Value) -> Value {
    json!({"id": "f1", "field": field(), "operator": operator, "value": value})
}

#[test]
fn test_valid_report() {
    assert!(validate_report_definition(&report()).is_empty());
}

#[test]
fn test_nested_field_errors_carry_index() {
    let mut report = report();
    report["selectedFields"] = json!([field(), {}]);

    let errors = validate_report_definition(&report);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("selectedFields[1] is invalid: "));

    report["selectedFields"] = json!([{}]);
    let errors = validate_report_definition(&report);
    assert!(errors.iter().any(|e| e.contains("selectedFields[0]")));
}

#[test]
fn test_empty_selected_field_message() {
    insta::assert_snapshot!(validate_selected_field(&json!({})).join("\n"), @r"
    id is required and must be a string
    tableName is required and must be a string
    fieldName is required and must be a string
    displayName is required and must be a string
    dataType must be a valid FieldDataType
    ");
}

#[test]
fn test_list_fields_must_be_arrays_and_layout_an_object() {
    let mut report = report();
    report["filters"] = json!({});
    report["layout"] = json!([]);
    assert_eq!(
        validate_report_definition(&report),
        vec![
            "filters must be an array".to_string(),
            "layout is required and must be an object".to_string(),
        ]
    );
}

#[test]
fn test_aggregation_and_formatting() {
    let mut f = field();
    f["aggregation"] = json!("median");
    f["formatting"] = json!("currency");
    assert_eq!(
        validate_selected_field(&f),
        vec![
            "aggregation must be a valid AggregationType".to_string(),
            "formatting must be an object".to_string(),
        ]
    );
}

#[test]
fn test_filter_value_shapes() {
    assert!(validate_filter_condition(&filter("between", json!({"start": 1, "end": 2}))).is_empty());
    assert_eq!(
        validate_filter_condition(&filter("between", json!(5))),
        vec!["value must be an object with start and end for operator between".to_string()]
    );

    assert!(validate_filter_condition(&filter("in_list", json!([1, 2]))).is_empty());
    assert!(validate_filter_condition(&filter("in_list", json!("1, 2"))).is_empty());
    assert_eq!(
        validate_filter_condition(&filter("in_list", json!({"start": 1}))),
        vec!["value must be an array or a comma-separated string for operator in_list".to_string()]
    );

    assert_eq!(
        validate_filter_condition(&filter("equals", json!([1]))),
        vec!["value must be a single value for operator equals".to_string()]
    );
}

#[test]
fn test_filter_shape_skipped_for_missing_value_or_bad_operator() {
    assert!(validate_filter_condition(&filter("equals", Value::Null)).is_empty());
    assert_eq!(
        validate_filter_condition(&filter("LIKE", json!([1]))),
        vec!["operator must be a valid FilterOperator".to_string()]
    );
}

#[test]
fn test_filter_field_wrapped() {
    let mut f = filter("equals", json!(1));
    f["field"]["dataType"] = json!("Number");
    assert_eq!(
        validate_filter_condition(&f),
        vec!["field is invalid: dataType must be a valid FieldDataType".to_string()]
    );
}

#[test]
fn test_sort_direction() {
    let mut sort = field();
    sort["direction"] = json!("DESC");
    assert_eq!(
        validate_sort_field(&sort),
        vec!["direction must be either 'asc' or 'desc'".to_string()]
    );
}

#[test]
fn test_parameter() {
    assert!(validate_report_parameter(&json!({"id": "p1", "name": "year", "type": "number", "required": true})).is_empty());
    assert_eq!(
        validate_report_parameter(&json!({"id": "p1", "name": "", "type": "number", "required": "no"})),
        vec![
            "name is required and must be a non-empty string".to_string(),
            "required must be a boolean".to_string(),
        ]
    );
}
