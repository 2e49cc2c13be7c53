//! Data source descriptors.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::schema::SchemaInfo;

pub const PORT_MIN: u16 = 1;
pub const PORT_MAX: u16 = 65535;

/// Connection and introspection settings for a relational data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Engine key, e.g. `sqlserver`, `postgresql`, `mysql`, `oracle`.
    #[serde(rename = "type")]
    pub db_type: String,
    pub server: String,
    #[serde(
        default,
        deserialize_with = "deserialize_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u16>,
    pub database: String,
    pub username: String,
    /// Absent only on redacted copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Embedded schema snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_schemas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_object_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_name_pattern: Option<String>,
}

impl DataSourceInfo {
    /// Structural validation of the serialized form.
    pub fn validate(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(value) => crate::validation::validate_data_source_info(&value),
            Err(e) => vec![format!("DataSourceInfo could not be serialized: {}", e)],
        }
    }
}

/// A data source with every field optional.
///
/// Input to [`normalize_data_source_info`](crate::transform::normalize_data_source_info)
/// and the update side of [`merge_data_source_info`](crate::transform::merge_data_source_info).
/// A `None` field means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialDataSourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(deserialize_with = "deserialize_port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_schemas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_object_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name_pattern: Option<String>,
}

/// Deserialize an optional port. Integer-valued floats such as `1433.0` are
/// accepted, matching [`validate_data_source_info`](crate::validation::validate_data_source_info).
pub fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Port>::deserialize(deserializer)?.map(|p| p.0))
}

struct Port(u16);

impl<'de> Deserialize<'de> for Port {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PortVisitor)
    }
}

struct PortVisitor;

impl<'de> Visitor<'de> for PortVisitor {
    type Value = Port;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an integer between {} and {}", PORT_MIN, PORT_MAX)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Port, E> {
        u16::try_from(v)
            .ok()
            .filter(|p| *p >= PORT_MIN)
            .map(Port)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Port, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Port, E> {
        if v.fract() == 0.0 && v >= f64::from(PORT_MIN) && v <= f64::from(PORT_MAX) {
            Ok(Port(v as u16))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}
