use serde_json::Value;

use super::{is_field_data_type, ObjectChecker};

pub fn validate_schema_info(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "SchemaInfo") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.array_of("tables", validate_table_info, true);
    c.array_of("relationships", validate_relationship, false);

    c.finish()
}

pub fn validate_table_info(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "TableInfo") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_non_empty_string("name");
    c.optional_string("displayName");
    c.optional_string("description");
    c.optional_string("category");
    c.array_of("columns", validate_column_info, true);

    c.finish()
}

pub fn validate_column_info(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "ColumnInfo") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_non_empty_string("name");
    c.required_non_empty_string("dataType");
    c.member_of("normalizedType", "FieldDataType", is_field_data_type, false);
    c.optional_bool("isPrimaryKey");
    c.optional_bool("isForeignKey");
    c.nested("foreignKeyReference", validate_foreign_key_reference, false);

    c.finish()
}

fn validate_foreign_key_reference(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "ForeignKeyReference") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_string("referencedTable");
    c.required_string("referencedColumn");
    c.required_string("constraintName");

    c.finish()
}

pub fn validate_relationship(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "Relationship") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    for key in ["id", "name", "parentTable", "childTable"] {
        c.required_non_empty_string(key);
    }
    c.array_of("columnMappings", validate_column_mapping, true);
    c.required_string("type");
    c.required_string("cardinality");
    c.optional_string("displayName");
    c.optional_string("description");

    c.finish()
}

fn validate_column_mapping(candidate: &Value) -> Vec<String> {
    let mut c = match ObjectChecker::begin(candidate, "ColumnMapping") {
        Ok(c) => c,
        Err(errors) => return errors,
    };

    c.required_string("parentColumn");
    c.required_string("childColumn");

    c.finish()
}
