//! Integration tests for raw type normalization.

use reportkit::model::{normalize_schema, normalize_type, ColumnInfo, FieldDataType, SchemaInfo, TableInfo};

#[test]
fn test_integer_precedence() {
    assert_eq!(normalize_type("int8"), FieldDataType::Bigint);
    assert_eq!(normalize_type("bigint"), FieldDataType::Bigint);
    assert_eq!(normalize_type("int2"), FieldDataType::Smallint);
    assert_eq!(normalize_type("smallint"), FieldDataType::Smallint);
    assert_eq!(normalize_type("integer"), FieldDataType::Number);
    assert_eq!(normalize_type("int"), FieldDataType::Number);
    assert_eq!(normalize_type("tinyint"), FieldDataType::Number);
}

#[test]
fn test_string_markers_win() {
    assert_eq!(normalize_type("NVARCHAR(100)"), FieldDataType::String);
    assert_eq!(normalize_type("character varying"), FieldDataType::String);
    assert_eq!(normalize_type("text"), FieldDataType::String);
}

#[test]
fn test_fractional_and_money_types() {
    assert_eq!(normalize_type("numeric(10,2)"), FieldDataType::Decimal);
    assert_eq!(normalize_type("DECIMAL(18, 4)"), FieldDataType::Decimal);
    assert_eq!(normalize_type("real"), FieldDataType::Float);
    assert_eq!(normalize_type("float8"), FieldDataType::Float);
    assert_eq!(normalize_type("double precision"), FieldDataType::Double);
    assert_eq!(normalize_type("smallmoney"), FieldDataType::Money);
    assert_eq!(normalize_type("money"), FieldDataType::Money);
}

#[test]
fn test_temporal_and_boolean() {
    assert_eq!(normalize_type("datetime2"), FieldDataType::Date);
    assert_eq!(normalize_type("timestamp with time zone"), FieldDataType::Date);
    assert_eq!(normalize_type("bit"), FieldDataType::Boolean);
    assert_eq!(normalize_type("boolean"), FieldDataType::Boolean);
}

#[test]
fn test_unknown_falls_back_to_string() {
    assert_eq!(normalize_type("unknown_xyz"), FieldDataType::String);
    assert_eq!(normalize_type(""), FieldDataType::String);
    assert_eq!(normalize_type("uniqueidentifier"), FieldDataType::String);
}

#[test]
fn test_normalization_is_stable() {
    for raw in ["int8", "varchar(5)", "numeric", "bit", "whatever"] {
        assert_eq!(normalize_type(raw), normalize_type(raw));
    }
}

#[test]
fn test_normalize_schema_recomputes_every_column() {
    let mut stale = ColumnInfo::new("total", "money");
    stale.normalized_type = Some(FieldDataType::String);

    let schema = SchemaInfo {
        tables: vec![TableInfo {
            name: "orders".to_string(),
            columns: vec![ColumnInfo::new("id", "bigint"), stale],
            ..Default::default()
        }],
        relationships: None,
    };

    let normalized = normalize_schema(&schema);
    let types: Vec<_> = normalized.tables[0]
        .columns
        .iter()
        .map(|c| c.normalized_type)
        .collect();
    assert_eq!(types, vec![Some(FieldDataType::Bigint), Some(FieldDataType::Money)]);

    // Input is left untouched.
    assert_eq!(schema.tables[0].columns[0].normalized_type, None);
}
