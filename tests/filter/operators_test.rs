//! Integration tests for operator legality, value shapes and display text.

use reportkit::config::DisplaySettings;
use reportkit::filter::{
    available_operators, default_operator, describe_filter, initial_value, input_kind,
    is_operator_allowed, operator_phrase, value_shape, InputKind, ValueShape,
};
use reportkit::model::{FieldDataType, FilterOperator, FilterValue, SelectedField, ValueRange};

#[test]
fn test_string_operators() {
    let ops = available_operators(FieldDataType::String);
    assert!(ops.contains(&FilterOperator::Contains));
    assert!(ops.contains(&FilterOperator::InList));
    assert!(!ops.contains(&FilterOperator::GreaterThan));
    assert!(!ops.contains(&FilterOperator::Between));
}

#[test]
fn test_date_operators() {
    let ops = available_operators(FieldDataType::Date);
    assert!(ops.contains(&FilterOperator::Between));
    assert!(ops.contains(&FilterOperator::LessThan));
    assert!(!ops.contains(&FilterOperator::InList));
    assert!(!ops.contains(&FilterOperator::Contains));
}

#[test]
fn test_base_pair_always_offered() {
    for field_type in FieldDataType::ALL {
        assert!(is_operator_allowed(field_type, FilterOperator::Equals));
        assert!(is_operator_allowed(field_type, FilterOperator::NotEquals));
    }
}

#[test]
fn test_default_operator_is_always_legal() {
    assert_eq!(default_operator(FieldDataType::String), FilterOperator::Contains);
    for field_type in FieldDataType::ALL {
        assert!(is_operator_allowed(field_type, default_operator(field_type)));
        if field_type != FieldDataType::String {
            assert_eq!(default_operator(field_type), FilterOperator::Equals);
        }
    }
}

#[test]
fn test_value_shapes() {
    assert_eq!(value_shape(FilterOperator::Between), ValueShape::Range);
    assert_eq!(value_shape(FilterOperator::InList), ValueShape::List);
    assert_eq!(value_shape(FilterOperator::StartsWith), ValueShape::Scalar);
    assert_eq!(
        initial_value(FilterOperator::Between),
        Some(FilterValue::Range(ValueRange::default()))
    );
}

#[test]
fn test_input_kinds() {
    assert_eq!(input_kind(FieldDataType::Money, FilterOperator::Equals, false), InputKind::Number);
    assert_eq!(input_kind(FieldDataType::Date, FilterOperator::GreaterThan, false), InputKind::Date);
    assert_eq!(input_kind(FieldDataType::String, FilterOperator::Contains, true), InputKind::Text);
}

#[test]
fn test_operator_phrases() {
    let phrases: Vec<_> = FilterOperator::ALL.into_iter().map(operator_phrase).collect();
    assert_eq!(
        phrases,
        vec![
            "equals",
            "does not equal",
            "contains",
            "starts with",
            "is greater than",
            "is less than",
            "is between",
            "is one of"
        ]
    );
}

#[test]
fn test_display_text() {
    let settings = DisplaySettings::default();
    let name = SelectedField::new("customers", "name", FieldDataType::String);
    let amount = SelectedField::new("orders", "amount", FieldDataType::Decimal);

    insta::assert_snapshot!(
        describe_filter(&name, FilterOperator::Contains, Some(&FilterValue::scalar("test")), &settings),
        @"Name contains test"
    );
    insta::assert_snapshot!(
        describe_filter(&amount, FilterOperator::GreaterThan, Some(&FilterValue::scalar("12345.5")), &settings),
        @"Amount is greater than 12,345.5"
    );
    insta::assert_snapshot!(
        describe_filter(&amount, FilterOperator::Between, Some(&FilterValue::range(1000, 2000)), &settings),
        @"Amount is between 1,000 and 2,000"
    );
    insta::assert_snapshot!(
        describe_filter(&name, FilterOperator::InList, Some(&FilterValue::scalar("a, b, c, d")), &settings),
        @"Name is one of a, b, c... (4 values)"
    );
    insta::assert_snapshot!(
        describe_filter(&name, FilterOperator::InList, Some(&FilterValue::list(["a", "b"])), &settings),
        @"Name is one of a, b"
    );
}

#[test]
fn test_display_text_with_custom_separators() {
    let settings = DisplaySettings {
        thousands_separator: ".".to_string(),
        decimal_separator: ",".to_string(),
        date_format: "%d.%m.%Y".to_string(),
        ..Default::default()
    };
    let amount = SelectedField::new("orders", "amount", FieldDataType::Decimal);
    let day = SelectedField::new("orders", "order_date", FieldDataType::Date);

    assert_eq!(
        describe_filter(&amount, FilterOperator::Equals, Some(&FilterValue::scalar(1234.25)), &settings),
        "Amount equals 1.234,25"
    );
    assert_eq!(
        describe_filter(&day, FilterOperator::LessThan, Some(&FilterValue::scalar("2024-12-31")), &settings),
        "Order Date is less than 31.12.2024"
    );
}
