//! Structural validation of report definitions.
//!
//! Every validator takes an arbitrary JSON candidate (often a partially
//! constructed object straight from the UI) and returns the list of problems
//! found. An empty list is the only success signal; validators never panic,
//! never return `Err`, and never modify the candidate.
//!
//! Nested entities are validated by the nested validator and reported with a
//! path prefix:
//!
//! ```text
//! selectedFields[0] is invalid: tableName is required and must be a string
//! dataSource is invalid: port must be an integer between 1 and 65535
//! ```

mod datasource;
mod report;
mod schema;

pub use datasource::validate_data_source_info;
pub use report::{
    validate_filter_condition, validate_group_by_field, validate_report_definition,
    validate_report_parameter, validate_selected_field, validate_sort_field,
};
pub use schema::{validate_column_info, validate_relationship, validate_schema_info, validate_table_info};

use serde_json::{Map, Value};

use crate::model::{AggregationType, FieldDataType, FilterOperator, SortDirection};

static NULL: Value = Value::Null;

/// Validator of one nested entity.
pub type EntityValidator = fn(&Value) -> Vec<String>;

// ============================================================================
// Type guards
// ============================================================================

pub fn is_data_source_info(candidate: &Value) -> bool {
    validate_data_source_info(candidate).is_empty()
}

/// A preview result needs a `columns` array of names and a `rows` array of
/// objects; `totalRows` and `executionTimeMs`, when present, must be
/// non-negative integers. Any other key is allowed.
pub fn is_preview_result(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };
    let all = |key: &str, pred: fn(&Value) -> bool| {
        obj.get(key)
            .and_then(Value::as_array)
            .is_some_and(|items| items.iter().all(pred))
    };
    let columns_ok = all("columns", Value::is_string);
    let rows_ok = all("rows", Value::is_object);
    let counts_ok = ["totalRows", "executionTimeMs"]
        .iter()
        .all(|key| obj.get(*key).map_or(true, Value::is_u64));
    columns_ok && rows_ok && counts_ok
}

pub fn is_field_data_type(candidate: &Value) -> bool {
    candidate.as_str().and_then(FieldDataType::from_str).is_some()
}

pub fn is_filter_operator(candidate: &Value) -> bool {
    candidate.as_str().and_then(FilterOperator::from_str).is_some()
}

pub fn is_aggregation_type(candidate: &Value) -> bool {
    candidate.as_str().and_then(AggregationType::from_str).is_some()
}

pub fn is_sort_direction(candidate: &Value) -> bool {
    candidate.as_str().and_then(SortDirection::from_str).is_some()
}

// ============================================================================
// Object checker
// ============================================================================

/// Accumulates errors for the properties of one candidate object.
pub(crate) struct ObjectChecker<'a> {
    obj: &'a Map<String, Value>,
    errors: Vec<String>,
}

impl<'a> ObjectChecker<'a> {
    /// Start checking `candidate`, or return the single short-circuit error
    /// when it is not an object.
    pub(crate) fn begin(candidate: &'a Value, entity: &str) -> Result<Self, Vec<String>> {
        match candidate.as_object() {
            Some(obj) => Ok(Self {
                obj,
                errors: Vec::new(),
            }),
            None => Err(vec![format!("{} must be a non-null object", entity)]),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.errors
    }

    /// Present, a string, and non-blank after trimming.
    pub(crate) fn required_non_empty_string(&mut self, key: &str) {
        let ok = self
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !ok {
            self.error(format!("{} is required and must be a non-empty string", key));
        }
    }

    pub(crate) fn required_string(&mut self, key: &str) {
        if !self.get(key).is_some_and(Value::is_string) {
            self.error(format!("{} is required and must be a string", key));
        }
    }

    pub(crate) fn optional_string(&mut self, key: &str) {
        if self.get(key).is_some_and(|v| !v.is_string()) {
            self.error(format!("{} must be a string", key));
        }
    }

    pub(crate) fn optional_bool(&mut self, key: &str) {
        if self.get(key).is_some_and(|v| !v.is_boolean()) {
            self.error(format!("{} must be a boolean", key));
        }
    }

    pub(crate) fn optional_object(&mut self, key: &str) {
        if self.get(key).is_some_and(|v| !v.is_object()) {
            self.error(format!("{} must be an object", key));
        }
    }

    pub(crate) fn optional_string_array(&mut self, key: &str) {
        let Some(value) = self.get(key) else {
            return;
        };
        let ok = value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string));
        if !ok {
            self.error(format!("{} must be an array of strings", key));
        }
    }

    /// Exact membership in a closed set of string values.
    pub(crate) fn member_of(
        &mut self,
        key: &str,
        set_name: &str,
        is_member: fn(&Value) -> bool,
        required: bool,
    ) {
        match self.get(key) {
            None if !required => {}
            Some(value) if is_member(value) => {}
            _ => self.error(format!("{} must be a valid {}", key, set_name)),
        }
    }

    /// Validate a nested entity and wrap its errors under `key`.
    pub(crate) fn nested(&mut self, key: &str, validator: EntityValidator, required: bool) {
        let value = match self.get(key) {
            Some(value) => value,
            None if !required => return,
            None => &NULL,
        };
        let nested = validator(value);
        if !nested.is_empty() {
            self.error(format!("{} is invalid: {}", key, nested.join(", ")));
        }
    }

    /// Validate every element of an array field.
    ///
    /// A non-array suppresses all per-element checks. Indices are positions in
    /// the original array.
    pub(crate) fn array_of(&mut self, key: &str, validator: EntityValidator, required: bool) {
        let items = match self.get(key) {
            None if !required => return,
            Some(Value::Array(items)) => items,
            _ => {
                self.error(format!("{} must be an array", key));
                return;
            }
        };
        for (index, item) in items.iter().enumerate() {
            let nested = validator(item);
            if !nested.is_empty() {
                self.error(format!("{}[{}] is invalid: {}", key, index, nested.join(", ")));
            }
        }
    }
}
