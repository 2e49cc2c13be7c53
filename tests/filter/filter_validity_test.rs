//! Integration tests for filter validity diagnostics and drafts.

use reportkit::config::DisplaySettings;
use reportkit::filter::{
    is_filter_valid, is_value_valid_for_type, validate_filter, FilterDraft, ENTER_END,
    ENTER_LIST_VALUE, ENTER_START, ENTER_VALUE, INVALID_DATE, INVALID_NUMBER, SELECT_FIELD,
};
use reportkit::model::{FieldDataType, FilterOperator, FilterValue, SelectedField, ValueRange};
use serde_json::{json, Value};

fn number_field() -> SelectedField {
    SelectedField::new("orders", "quantity", FieldDataType::Number)
}

fn date_field() -> SelectedField {
    SelectedField::new("orders", "order_date", FieldDataType::Date)
}

fn message(field: &SelectedField, operator: FilterOperator, value: Option<FilterValue>) -> Option<String> {
    validate_filter(Some(field), Some(operator), value.as_ref()).message
}

#[test]
fn test_letters_rejected_for_numbers() {
    assert_eq!(
        message(&number_field(), FilterOperator::Equals, Some(FilterValue::scalar("12a"))).as_deref(),
        Some(INVALID_NUMBER)
    );
    assert_eq!(message(&number_field(), FilterOperator::Equals, Some(FilterValue::scalar("12"))), None);
    assert_eq!(message(&number_field(), FilterOperator::Equals, Some(FilterValue::scalar(12.5))), None);
}

#[test]
fn test_dates_must_parse() {
    assert_eq!(
        message(&date_field(), FilterOperator::GreaterThan, Some(FilterValue::scalar("soon"))).as_deref(),
        Some(INVALID_DATE)
    );
    assert_eq!(
        message(&date_field(), FilterOperator::GreaterThan, Some(FilterValue::scalar("2024-06-01"))),
        None
    );
}

#[test]
fn test_blank_scalar_needs_value() {
    for value in [None, Some(FilterValue::scalar("")), Some(FilterValue::Scalar(Value::Null))] {
        assert_eq!(
            message(&number_field(), FilterOperator::Equals, value).as_deref(),
            Some(ENTER_VALUE)
        );
    }
}

#[test]
fn test_between_incomplete() {
    let range = |start: Option<Value>, end: Option<Value>| Some(FilterValue::Range(ValueRange { start, end }));

    assert_eq!(
        message(&date_field(), FilterOperator::Between, range(None, Some(json!("2024-01-01")))).as_deref(),
        Some(ENTER_START)
    );
    assert_eq!(
        message(&date_field(), FilterOperator::Between, range(Some(json!("2024-01-01")), None)).as_deref(),
        Some(ENTER_END)
    );
    assert_eq!(
        message(&date_field(), FilterOperator::Between, range(Some(json!("2024-01-01")), Some(json!("2024-02-01")))),
        None
    );
}

#[test]
fn test_in_list_empty() {
    assert_eq!(
        message(&number_field(), FilterOperator::InList, Some(FilterValue::List(vec![]))).as_deref(),
        Some(ENTER_LIST_VALUE)
    );
    assert_eq!(
        message(&number_field(), FilterOperator::InList, Some(FilterValue::scalar("1, x"))).as_deref(),
        Some(INVALID_NUMBER)
    );
    assert_eq!(message(&number_field(), FilterOperator::InList, Some(FilterValue::scalar("1,2,3"))), None);
}

#[test]
fn test_nothing_selected() {
    assert_eq!(validate_filter(None, None, None).message.as_deref(), Some(SELECT_FIELD));
    assert!(!is_filter_valid(None, Some(FilterOperator::Equals), Some(&FilterValue::scalar(1))));
}

#[test]
fn test_between_components_checked_separately() {
    let op = FilterOperator::Between;
    assert!(!is_value_valid_for_type(FieldDataType::Number, op, &FilterValue::range(1, "x")));
    assert!(is_value_valid_for_type(FieldDataType::Number, op, &FilterValue::range(1, 10)));
    assert!(is_value_valid_for_type(FieldDataType::Number, op, &FilterValue::range(" 1 ", "1e2")));
}

#[test]
fn test_validity_is_repeatable() {
    let field = number_field();
    let value = FilterValue::range(1, "x");
    let first = validate_filter(Some(&field), Some(FilterOperator::Between), Some(&value));
    let second = validate_filter(Some(&field), Some(FilterOperator::Between), Some(&value));
    assert_eq!(first, second);
}

#[test]
fn test_draft_walkthrough() {
    let settings = DisplaySettings::default();

    let draft = FilterDraft::new("f1");
    assert!(draft.available_operators().is_empty());
    assert_eq!(draft.validate().message.as_deref(), Some(SELECT_FIELD));

    let draft = draft.with_field(number_field());
    assert_eq!(draft.operator, Some(FilterOperator::Equals));
    assert_eq!(draft.validate().message.as_deref(), Some(ENTER_VALUE));

    let draft = draft.with_operator(FilterOperator::Between);
    assert_eq!(draft.validate().message.as_deref(), Some(ENTER_START));

    let draft = draft.with_value(Some(FilterValue::range(5, 50)));
    assert!(draft.is_valid());
    assert_eq!(draft.display_text(&settings), "Quantity is between 5 and 50");

    let condition = draft.into_condition(&settings).unwrap();
    assert_eq!(condition.id, "f1");
    assert_eq!(condition.operator, FilterOperator::Between);
    assert!(condition.validate().is_empty());
}

#[test]
fn test_reopened_condition_keeps_its_value() {
    let settings = DisplaySettings::default();
    let condition = FilterDraft::new("f2")
        .with_field(SelectedField::new("customers", "name", FieldDataType::String))
        .with_operator(FilterOperator::StartsWith)
        .with_value(Some(FilterValue::scalar("Ac")))
        .into_condition(&settings)
        .unwrap();

    let reopened = FilterDraft::from_condition(&condition).with_operator(FilterOperator::Contains);
    assert_eq!(reopened.value, Some(FilterValue::scalar("Ac")));
    assert_eq!(reopened.display_text(&settings), "Name contains Ac");
}
