//! TOML-based configuration for reportkit.
//!
//! Supports a config file (reportkit.toml) with environment variable expansion
//! in named connections.
//!
//! Example configuration:
//! ```toml
//! [defaults]
//! engine = "sqlserver"
//! server = "localhost"
//!
//! [display]
//! date_format = "%d.%m.%Y"
//! thousands_separator = "."
//! decimal_separator = ","
//! list_preview_limit = 3
//!
//! [logging]
//! filter = "reportkit=debug"
//! format = "json"
//!
//! [connections.warehouse]
//! type = "postgresql"
//! server = "warehouse.internal"
//! port = 5432
//! database = "sales"
//! username = "report"
//! password = "${WAREHOUSE_PASSWORD}"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{DataSourceInfo, PartialDataSourceInfo};
use crate::transform::normalize_data_source_info_with;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "REPORTKIT_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Values filled in when a data source leaves them out.
    pub defaults: DataSourceDefaults,

    /// Formatting of filter display text.
    pub display: DisplaySettings,

    /// Log output of the CLI.
    pub logging: LoggingSettings,

    /// Named data sources.
    pub connections: HashMap<String, ConnectionSettings>,
}

/// Defaults for `type` and `server` of a normalized data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSourceDefaults {
    pub engine: String,
    pub server: String,
}

impl Default for DataSourceDefaults {
    fn default() -> Self {
        Self {
            engine: "sqlserver".to_string(),
            server: "localhost".to_string(),
        }
    }
}

/// How values are rendered in filter display text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// chrono format string for dates.
    pub date_format: String,

    pub thousands_separator: String,

    pub decimal_separator: String,

    /// Digits kept after the decimal separator.
    pub max_fraction_digits: usize,

    /// `in_list` values shown before collapsing to "... (N values)".
    pub list_preview_limit: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: "%m/%d/%Y".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            max_fraction_digits: 3,
            list_preview_limit: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,

    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// A named data source. String values support `${VAR}` / `$VAR` expansion.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Engine key (sqlserver, postgresql, mysql, oracle, ...).
    #[serde(rename = "type")]
    pub engine: Option<String>,
    pub server: Option<String>,
    #[serde(deserialize_with = "crate::model::datasource::deserialize_port")]
    pub port: Option<u16>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub included_schemas: Option<Vec<String>>,
    pub included_object_types: Option<Vec<String>>,
    pub object_name_pattern: Option<String>,
}

impl ConnectionSettings {
    /// Expand environment variables and convert into a partial data source
    /// named `name`.
    pub fn to_partial(&self, name: &str) -> Result<PartialDataSourceInfo, SettingsError> {
        let expand = |value: &Option<String>| value.as_deref().map(expand_env_vars).transpose();

        Ok(PartialDataSourceInfo {
            name: Some(name.to_string()),
            db_type: expand(&self.engine)?,
            server: expand(&self.server)?,
            port: self.port,
            database: expand(&self.database)?,
            username: expand(&self.username)?,
            password: expand(&self.password)?,
            included_schemas: self.included_schemas.clone(),
            included_object_types: self.included_object_types.clone(),
            object_name_pattern: self.object_name_pattern.clone(),
            ..Default::default()
        })
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "loading settings");
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `REPORTKIT_CONFIG`
    /// 2. `./reportkit.toml`
    /// 3. `~/.config/reportkit/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("reportkit.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("reportkit").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Settings::default())
    }

    pub fn get_connection(&self, name: &str) -> Result<&ConnectionSettings, SettingsError> {
        self.connections
            .get(name)
            .ok_or_else(|| SettingsError::ConnectionNotFound(name.to_string()))
    }

    /// Resolve a named connection into a normalized data source.
    pub fn data_source(&self, name: &str) -> Result<DataSourceInfo, SettingsError> {
        let partial = self.get_connection(name)?.to_partial(name)?;
        Ok(normalize_data_source_info_with(partial, &self.defaults))
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A lone `$` is kept as is.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            let name: String = std::iter::from_fn(|| chars.next_if(|&ch| ch != '}')).collect();
            chars.next(); // closing '}'
            name
        } else {
            std::iter::from_fn(|| chars.next_if(|&ch| ch.is_alphanumeric() || ch == '_')).collect()
        };

        if var_name.is_empty() {
            result.push('$');
            continue;
        }

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
