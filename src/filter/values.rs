//! Parsing and type validation of entered filter values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::model::{FieldDataType, FilterOperator, FilterValue};

use super::operators::{value_shape, ValueShape};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a number the way a browser's `Number(x)` would, rejecting anything
/// that is not finite.
///
/// Strings are trimmed; an empty string is zero. Hex, octal and binary
/// literals (`0x1f`) are accepted. Booleans count as 0/1.
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_number_str(s)?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_number_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    // f64's parser also accepts "inf"/"nan" spellings; those fail the
    // finiteness check in the caller.
    s.parse::<f64>().ok()
}

/// Parse a date or date-time.
///
/// Accepts RFC 3339, ISO dates and date-times (with `T` or a space), `Y/m/d`,
/// `m/d/Y`, and JSON numbers as milliseconds since the epoch.
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => {
            let millis = n.as_f64().filter(|m| m.is_finite())?;
            DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Null and blank strings count as "nothing entered".
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Split comma-separated list text into trimmed, non-empty segments.
pub fn split_list(s: &str) -> Vec<Value> {
    s.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| Value::String(segment.to_string()))
        .collect()
}

/// Whether `value` has the shape `operator` expects.
pub fn matches_shape(operator: FilterOperator, value: &FilterValue) -> bool {
    match (value_shape(operator), value) {
        (ValueShape::Range, FilterValue::Range(_)) => true,
        (ValueShape::List, FilterValue::List(_)) => true,
        (ValueShape::List, FilterValue::Scalar(v)) => !v.is_object() && !v.is_array(),
        (ValueShape::Scalar, FilterValue::Scalar(_)) => true,
        _ => false,
    }
}

/// The scalar values that make up `value` under `operator`.
///
/// Range bounds that have not been entered yet are skipped; list text is
/// split on commas. Returns `None` when the shape does not fit the operator.
pub fn components(operator: FilterOperator, value: &FilterValue) -> Option<Vec<Value>> {
    if !matches_shape(operator, value) {
        return None;
    }
    let parts: Vec<Value> = match value {
        FilterValue::Range(range) => [&range.start, &range.end]
            .into_iter()
            .flatten()
            .filter(|v| !v.is_null())
            .cloned()
            .collect(),
        FilterValue::List(items) => items.clone(),
        FilterValue::Scalar(Value::String(s)) if value_shape(operator) == ValueShape::List => {
            split_list(s)
        }
        FilterValue::Scalar(v) => vec![v.clone()],
    };
    Some(parts)
}

fn component_valid(field_type: FieldDataType, component: &Value) -> bool {
    if field_type.is_numeric() {
        parse_number(component).is_some()
    } else if field_type.is_date() {
        parse_date(component).is_some()
    } else {
        !is_blank(component)
    }
}

/// Whether every scalar component of `value` fits `field_type`.
///
/// Numeric fields need parseable finite numbers, date fields need parseable
/// dates, every other type needs a non-blank value.
pub fn is_value_valid_for_type(
    field_type: FieldDataType,
    operator: FilterOperator,
    value: &FilterValue,
) -> bool {
    match components(operator, value) {
        Some(parts) => parts.iter().all(|part| component_valid(field_type, part)),
        None => false,
    }
}
