use serde_json::Value;

use crate::model::datasource::{PORT_MAX, PORT_MIN};

use super::{validate_schema_info, ObjectChecker};

/// Validate a data source descriptor.
///
/// `name`, `type`, `server`, `database` and `username` must be non-blank
/// strings. `password` must be present as a string but may be empty.
pub fn validate_data_source_info(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "DataSourceInfo") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.optional_string("id");
    for key in ["name", "type", "server", "database", "username"] {
        c.required_non_empty_string(key);
    }
    c.required_string("password");

    if let Some(port) = c.get("port") {
        if !is_valid_port(port) {
            c.error(format!(
                "port must be an integer between {} and {}",
                PORT_MIN, PORT_MAX
            ));
        }
    }

    c.nested("schema", validate_schema_info, false);
    c.optional_string_array("includedSchemas");
    c.optional_string_array("includedObjectTypes");
    c.optional_string("objectNamePattern");

    c.finish()
}

/// Integer-valued number in range. `5432.0` counts as an integer.
fn is_valid_port(value: &Value) -> bool {
    let Some(n) = value.as_f64() else {
        return false;
    };
    n.fract() == 0.0 && n >= f64::from(PORT_MIN) && n <= f64::from(PORT_MAX)
}
