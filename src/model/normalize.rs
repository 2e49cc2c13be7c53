//! Normalization of engine-native column types into [`FieldDataType`].
//!
//! Matching is case-insensitive and substring based, tested in a fixed
//! precedence order. Integer markers are tested before the float/decimal
//! markers because strings like `int8` overlap with them.

use super::schema::SchemaInfo;
use super::types::FieldDataType;

const STRING_MARKERS: &[&str] = &["char", "text", "varchar", "nvarchar"];
const INTEGER_MARKERS: &[&str] = &["int", "integer"];
const BIGINT_MARKERS: &[&str] = &["big", "int8"];
const SMALLINT_MARKERS: &[&str] = &["small", "int2"];
const FLOAT_MARKERS: &[&str] = &["float", "real"];
const DOUBLE_MARKERS: &[&str] = &["double"];
const DECIMAL_MARKERS: &[&str] = &["decimal", "numeric"];
const MONEY_MARKERS: &[&str] = &["money", "currency"];
const DATE_MARKERS: &[&str] = &["date", "time", "timestamp"];

/// Map a raw database type string to its semantic type.
///
/// Total: anything unrecognized is treated as [`FieldDataType::String`].
///
/// ```
/// use reportkit::model::{normalize_type, FieldDataType};
///
/// assert_eq!(normalize_type("NVARCHAR(100)"), FieldDataType::String);
/// assert_eq!(normalize_type("int8"), FieldDataType::Bigint);
/// assert_eq!(normalize_type("numeric(10,2)"), FieldDataType::Decimal);
/// ```
pub fn normalize_type(raw: &str) -> FieldDataType {
    let s = raw.trim().to_lowercase();
    let has = |markers: &[&str]| markers.iter().any(|m| s.contains(m));

    if has(STRING_MARKERS) {
        FieldDataType::String
    } else if has(INTEGER_MARKERS) {
        if has(BIGINT_MARKERS) {
            FieldDataType::Bigint
        } else if has(SMALLINT_MARKERS) {
            FieldDataType::Smallint
        } else {
            FieldDataType::Number
        }
    } else if has(FLOAT_MARKERS) {
        FieldDataType::Float
    } else if has(DOUBLE_MARKERS) {
        FieldDataType::Double
    } else if has(DECIMAL_MARKERS) {
        FieldDataType::Decimal
    } else if has(MONEY_MARKERS) {
        FieldDataType::Money
    } else if has(DATE_MARKERS) {
        FieldDataType::Date
    } else if s.contains("bool") || s == "bit" {
        FieldDataType::Boolean
    } else {
        FieldDataType::String
    }
}

/// Return a copy of `schema` with `normalizedType` populated on every column.
///
/// Existing normalized types are recomputed from `dataType` so that a stale
/// snapshot cannot disagree with its raw types.
pub fn normalize_schema(schema: &SchemaInfo) -> SchemaInfo {
    let mut normalized = schema.clone();
    let mut column_count = 0usize;

    for table in &mut normalized.tables {
        for column in &mut table.columns {
            column.normalized_type = Some(normalize_type(&column.data_type));
            column_count += 1;
        }
    }

    tracing::debug!(
        tables = normalized.tables.len(),
        columns = column_count,
        "normalized schema column types"
    );

    normalized
}
