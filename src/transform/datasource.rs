//! Copy, fill and merge data source descriptors.

use crate::config::DataSourceDefaults;
use crate::model::{DataSourceInfo, PartialDataSourceInfo};

/// Deep copy of `ds`, optionally without its password.
///
/// With `omit_password` the result has no `password` at all (the key is absent
/// when serialized), not an empty one.
pub fn clone_data_source_info(ds: &DataSourceInfo, omit_password: bool) -> DataSourceInfo {
    let mut copy = ds.clone();
    if omit_password {
        copy.password = None;
    }
    copy
}

/// Fill the required fields of a partial data source with built-in defaults.
///
/// `name`, `database`, `username` and `password` become empty strings, `type`
/// becomes `sqlserver` and `server` becomes `localhost`. The introspection
/// filter lists default to empty; everything else passes through unchanged.
pub fn normalize_data_source_info(partial: PartialDataSourceInfo) -> DataSourceInfo {
    normalize_data_source_info_with(partial, &DataSourceDefaults::default())
}

/// [`normalize_data_source_info`] with configured engine/server defaults.
pub fn normalize_data_source_info_with(
    partial: PartialDataSourceInfo,
    defaults: &DataSourceDefaults,
) -> DataSourceInfo {
    DataSourceInfo {
        id: partial.id,
        name: partial.name.unwrap_or_default(),
        db_type: partial.db_type.unwrap_or_else(|| defaults.engine.clone()),
        server: partial.server.unwrap_or_else(|| defaults.server.clone()),
        port: partial.port,
        database: partial.database.unwrap_or_default(),
        username: partial.username.unwrap_or_default(),
        password: Some(partial.password.unwrap_or_default()),
        schema: partial.schema,
        included_schemas: Some(partial.included_schemas.unwrap_or_default()),
        included_object_types: Some(partial.included_object_types.unwrap_or_default()),
        object_name_pattern: partial.object_name_pattern,
    }
}

/// Apply `updates` over `base`.
///
/// Every field present in `updates` replaces the base value; absent fields keep
/// it. The list fields and the schema are replaced wholesale, never merged
/// element by element.
pub fn merge_data_source_info(base: &DataSourceInfo, updates: &PartialDataSourceInfo) -> DataSourceInfo {
    let updates = updates.clone();
    let base = base.clone();

    DataSourceInfo {
        id: updates.id.or(base.id),
        name: updates.name.unwrap_or(base.name),
        db_type: updates.db_type.unwrap_or(base.db_type),
        server: updates.server.unwrap_or(base.server),
        port: updates.port.or(base.port),
        database: updates.database.unwrap_or(base.database),
        username: updates.username.unwrap_or(base.username),
        password: updates.password.or(base.password),
        schema: updates.schema.or(base.schema),
        included_schemas: updates.included_schemas.or(base.included_schemas),
        included_object_types: updates.included_object_types.or(base.included_object_types),
        object_name_pattern: updates.object_name_pattern.or(base.object_name_pattern),
    }
}
