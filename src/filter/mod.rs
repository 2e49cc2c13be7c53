//! Filter operator resolution.
//!
//! Given a field's semantic type this module answers which operators are
//! legal, which one is the default, what shape of value each operator takes,
//! whether an entered value fits, and how the whole condition reads in prose.
//! None of it fails: an incomplete filter is reported through
//! [`ValidationResult`].

mod display;
mod draft;
mod operators;
mod validity;
mod values;

pub use display::{describe_filter, format_date, format_number, format_value, operator_phrase};
pub use draft::FilterDraft;
pub use operators::{
    available_operators, default_operator, initial_value, input_kind, is_operator_allowed,
    requires_value, value_shape, InputKind, ValueShape,
};
pub use validity::{
    is_filter_valid, validate_filter, ValidationResult, ENTER_END, ENTER_LIST_VALUE, ENTER_START,
    ENTER_VALUE, INCOMPLETE, INVALID_DATE, INVALID_NUMBER, INVALID_VALUE, SELECT_FIELD,
    SELECT_OPERATOR,
};
pub use values::{components, is_blank, is_value_valid_for_type, matches_shape, parse_date, parse_number, split_list};
