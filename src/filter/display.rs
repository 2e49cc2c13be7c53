//! Human-readable filter descriptions, e.g. `Name contains test`.
//!
//! Display text is always derived from field, operator and value; it is never
//! read back.

use std::fmt::Write;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::config::DisplaySettings;
use crate::model::{FieldDataType, FilterOperator, FilterValue, SelectedField};

use super::operators::{value_shape, ValueShape};
use super::values::{is_blank, parse_date, parse_number, split_list};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn operator_phrase(operator: FilterOperator) -> &'static str {
    match operator {
        FilterOperator::Equals => "equals",
        FilterOperator::NotEquals => "does not equal",
        FilterOperator::Contains => "contains",
        FilterOperator::StartsWith => "starts with",
        FilterOperator::GreaterThan => "is greater than",
        FilterOperator::LessThan => "is less than",
        FilterOperator::Between => "is between",
        FilterOperator::InList => "is one of",
    }
}

/// `"<displayName> <operator phrase> <value>"`, without a trailing space when
/// there is no value to show.
pub fn describe_filter(
    field: &SelectedField,
    operator: FilterOperator,
    value: Option<&FilterValue>,
    settings: &DisplaySettings,
) -> String {
    let value_text = value
        .map(|v| value_phrase(field.data_type, operator, v, settings))
        .unwrap_or_default();

    let mut text = format!("{} {}", field.display_name, operator_phrase(operator));
    if !value_text.is_empty() {
        text.push(' ');
        text.push_str(&value_text);
    }
    text
}

fn value_phrase(
    field_type: FieldDataType,
    operator: FilterOperator,
    value: &FilterValue,
    settings: &DisplaySettings,
) -> String {
    let format = |v: &Value| format_value(field_type, v, settings);

    match value {
        FilterValue::Range(range) => {
            let bound = |b: &Option<Value>| b.as_ref().map(format).unwrap_or_default();
            let (start, end) = (bound(&range.start), bound(&range.end));
            match (start.is_empty(), end.is_empty()) {
                (_, true) => start,
                (true, false) => format!("and {}", end),
                (false, false) => format!("{} and {}", start, end),
            }
        }
        FilterValue::List(items) => list_phrase(items.iter().map(format).collect(), settings),
        FilterValue::Scalar(Value::String(s)) if value_shape(operator) == ValueShape::List => {
            list_phrase(split_list(s).iter().map(format).collect(), settings)
        }
        FilterValue::Scalar(v) => format(v),
    }
}

fn list_phrase(items: Vec<String>, settings: &DisplaySettings) -> String {
    let limit = settings.list_preview_limit;
    if items.len() > limit {
        format!("{}... ({} values)", items[..limit].join(", "), items.len())
    } else {
        items.join(", ")
    }
}

/// Render one scalar the way it is shown to users: numbers grouped, dates in
/// the configured format, strings as entered.
pub fn format_value(field_type: FieldDataType, value: &Value, settings: &DisplaySettings) -> String {
    if field_type.is_numeric() {
        if let Some(n) = parse_number(value).filter(|_| !is_blank(value)) {
            return format_number(n, settings);
        }
    } else if field_type.is_date() {
        if let Some(date) = parse_date(value) {
            return format_date(&date, settings);
        }
    }

    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Group the integer part by thousands and keep at most
/// `max_fraction_digits` fraction digits, trailing zeros removed.
pub fn format_number(n: f64, settings: &DisplaySettings) -> String {
    let fixed = format!("{:.*}", settings.max_fraction_digits, n.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push_str(&settings.thousands_separator);
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if n < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push_str(&settings.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Format with the configured pattern; an invalid pattern falls back to ISO.
pub fn format_date(date: &NaiveDateTime, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_ok() {
        return out;
    }

    tracing::debug!(format = %settings.date_format, "invalid date format, using ISO dates");
    out.clear();
    match write!(out, "{}", date.format(FALLBACK_DATE_FORMAT)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}
