//! A filter under construction.
//!
//! ```text
//! no field ──with_field──▶ field + default operator
//!          ──with_operator──▶ value shape initialized
//!          ──with_value──▶ re-validated on every change
//! ```
//!
//! Every transition consumes the draft and returns a new one; there is no
//! committed state, validity is recomputed on demand.

use uuid::Uuid;

use crate::config::DisplaySettings;
use crate::model::{FilterCondition, FilterOperator, FilterValue, SelectedField};

use super::display::describe_filter;
use super::operators::{available_operators, default_operator, initial_value, is_operator_allowed, value_shape};
use super::validity::{validate_filter, ValidationResult};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub id: String,
    pub field: Option<SelectedField>,
    pub operator: Option<FilterOperator>,
    pub value: Option<FilterValue>,
}

impl FilterDraft {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field: None,
            operator: None,
            value: None,
        }
    }

    /// Empty draft with a fresh `filter_<uuid>` id.
    pub fn generate() -> Self {
        Self::new(format!("filter_{}", Uuid::new_v4().simple()))
    }

    /// Reopen a stored condition for editing.
    pub fn from_condition(condition: &FilterCondition) -> Self {
        Self {
            id: condition.id.clone(),
            field: Some(condition.field.clone()),
            operator: Some(condition.operator),
            value: condition.value.clone(),
        }
    }

    /// Choose a field. Operator and value are reset to the field type's
    /// defaults.
    pub fn with_field(self, field: SelectedField) -> Self {
        let operator = default_operator(field.data_type);
        Self {
            field: Some(field),
            operator: Some(operator),
            value: initial_value(operator),
            ..self
        }
    }

    /// Choose an operator. Operators the field type does not offer are
    /// ignored. The value is reinitialized only when its shape changes.
    pub fn with_operator(self, operator: FilterOperator) -> Self {
        let Some(field) = &self.field else {
            return self;
        };
        if !is_operator_allowed(field.data_type, operator) {
            tracing::trace!(%operator, field = %field.id, "ignoring operator not offered for field type");
            return self;
        }

        let shape_changed = self.operator.map(value_shape) != Some(value_shape(operator));
        let value = if shape_changed { initial_value(operator) } else { self.value };
        Self {
            operator: Some(operator),
            value,
            ..self
        }
    }

    pub fn with_value(self, value: Option<FilterValue>) -> Self {
        Self { value, ..self }
    }

    /// Operators offered for the current field; empty without a field.
    pub fn available_operators(&self) -> Vec<FilterOperator> {
        self.field
            .as_ref()
            .map(|f| available_operators(f.data_type))
            .unwrap_or_default()
    }

    pub fn validate(&self) -> ValidationResult {
        validate_filter(self.field.as_ref(), self.operator, self.value.as_ref())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid
    }

    /// Description of the draft so far; empty until field and operator are set.
    pub fn display_text(&self, settings: &DisplaySettings) -> String {
        match (&self.field, self.operator) {
            (Some(field), Some(operator)) => describe_filter(field, operator, self.value.as_ref(), settings),
            _ => String::new(),
        }
    }

    /// Finish the draft. Returns `None` while it is not valid.
    pub fn into_condition(self, settings: &DisplaySettings) -> Option<FilterCondition> {
        if !self.is_valid() {
            return None;
        }
        let display_text = self.display_text(settings);
        Some(FilterCondition {
            id: self.id,
            field: self.field?,
            operator: self.operator?,
            value: self.value,
            display_text,
        })
    }
}
