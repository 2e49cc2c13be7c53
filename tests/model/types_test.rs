//! Integration tests for the type taxonomy.

use reportkit::model::{AggregationType, FieldDataType, FilterOperator, SortDirection};

#[test]
fn test_every_field_type_round_trips_through_its_name() {
    for field_type in FieldDataType::ALL {
        assert_eq!(FieldDataType::from_str(field_type.as_str()), Some(field_type));
        assert_eq!(field_type.to_string(), field_type.as_str());
    }
}

#[test]
fn test_operator_names_are_snake_case() {
    let names: Vec<_> = FilterOperator::ALL.iter().map(|o| o.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "equals",
            "not_equals",
            "contains",
            "starts_with",
            "greater_than",
            "less_than",
            "between",
            "in_list"
        ]
    );
}

#[test]
fn test_numeric_and_groupable_overlap() {
    let both: Vec<_> = FieldDataType::ALL
        .into_iter()
        .filter(|t| t.is_numeric() && t.is_groupable())
        .collect();
    assert_eq!(
        both,
        vec![FieldDataType::Number, FieldDataType::Smallint, FieldDataType::Bigint]
    );
}

#[test]
fn test_unknown_names_rejected() {
    assert_eq!(FieldDataType::from_str("integer"), None);
    assert_eq!(FieldDataType::from_str(""), None);
    assert_eq!(AggregationType::from_str("average"), None);
    assert_eq!(FilterOperator::from_str("like"), None);
    assert_eq!(SortDirection::from_str("ascending"), None);
}

#[test]
fn test_sort_direction_defaults_to_ascending() {
    assert_eq!(SortDirection::default(), SortDirection::Asc);
    let parsed: SortDirection = serde_json::from_str("\"desc\"").unwrap();
    assert_eq!(parsed.as_str(), "desc");
}
