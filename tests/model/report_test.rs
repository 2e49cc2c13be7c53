//! Integration tests for the report definition model.

use reportkit::model::{
    AggregationType, ColumnInfo, FieldDataType, FilterOperator, FilterValue, PreviewResult,
    ReportDefinition, SelectedField, SortDirection, ValueRange,
};
use serde_json::json;

fn report_json() -> serde_json::Value {
    json!({
        "id": "r1",
        "name": "Sales by region",
        "dataSource": {
            "name": "Warehouse",
            "type": "postgresql",
            "server": "db",
            "port": 5432,
            "database": "sales",
            "username": "report",
            "password": "secret"
        },
        "selectedFields": [
            {
                "id": "orders.region",
                "tableName": "orders",
                "fieldName": "region",
                "displayName": "Region",
                "dataType": "string"
            },
            {
                "id": "orders.total",
                "tableName": "orders",
                "fieldName": "total",
                "displayName": "Total",
                "dataType": "money",
                "aggregation": "sum"
            }
        ],
        "filters": [
            {
                "id": "f1",
                "field": {
                    "id": "orders.total",
                    "tableName": "orders",
                    "fieldName": "total",
                    "displayName": "Total",
                    "dataType": "money"
                },
                "operator": "between",
                "value": {"start": 10, "end": 500},
                "displayText": "Total is between 10 and 500"
            }
        ],
        "groupBy": [
            {"id": "orders.region", "tableName": "orders", "fieldName": "region", "displayName": "Region"}
        ],
        "sorting": [
            {"id": "orders.total", "tableName": "orders", "fieldName": "total", "displayName": "Total", "direction": "desc"}
        ],
        "layout": {"orientation": "portrait"},
        "parameters": []
    })
}

#[test]
fn test_report_deserializes_with_typed_enums() {
    let report: ReportDefinition = serde_json::from_value(report_json()).unwrap();

    assert_eq!(report.selected_fields[1].aggregation, Some(AggregationType::Sum));
    assert_eq!(report.filters[0].operator, FilterOperator::Between);
    assert_eq!(report.filters[0].value, Some(FilterValue::range(10, 500)));
    assert_eq!(report.sorting[0].direction, SortDirection::Desc);
    assert_eq!(report.data_source.as_ref().and_then(|ds| ds.port), Some(5432));
    assert_eq!(report.field("orders.region").map(|f| f.data_type), Some(FieldDataType::String));
    assert!(report.validate().is_empty());
}

#[test]
fn test_report_serializes_back_to_the_same_document() {
    let report: ReportDefinition = serde_json::from_value(report_json()).unwrap();
    assert_eq!(serde_json::to_value(&report).unwrap(), report_json());
}

#[test]
fn test_missing_data_source_is_null_on_the_wire() {
    let report = ReportDefinition {
        name: "draft".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["dataSource"].is_null());
    assert!(report
        .validate()
        .iter()
        .any(|e| e.starts_with("dataSource is invalid")));
}

#[test]
fn test_half_entered_range() {
    let value: FilterValue = serde_json::from_value(json!({"start": 5})).unwrap();
    assert_eq!(
        value,
        FilterValue::Range(ValueRange {
            start: Some(json!(5)),
            end: None
        })
    );
}

#[test]
fn test_selected_field_from_normalized_column() {
    let mut column = ColumnInfo::new("unit_price", "varchar(10)");
    column.normalized_type = Some(FieldDataType::Decimal);

    let field = SelectedField::from_column("products", &column);
    assert_eq!(field.id, "products.unit_price");
    assert_eq!(field.display_name, "Unit Price");
    assert_eq!(field.data_type, FieldDataType::Decimal);
    assert!(field.validate().is_empty());
}

#[test]
fn test_preview_result_keeps_extra_keys() {
    let preview: PreviewResult = serde_json::from_value(json!({
        "columns": ["region", "total"],
        "rows": [{"region": "EU", "total": 10}],
        "totalRows": 1,
        "executionTimeMs": 12,
        "cached": true
    }))
    .unwrap();

    assert_eq!(preview.execution_time_ms, Some(12));
    assert_eq!(preview.extra.get("cached"), Some(&json!(true)));
    assert!(!preview.is_truncated());
}
