//! Configuration module for reportkit.
//!
//! Handles the settings file, named connections and environment variables.

mod settings;

pub use settings::{
    expand_env_vars, ConnectionSettings, DataSourceDefaults, DisplaySettings, LogFormat,
    LoggingSettings, Settings, SettingsError, CONFIG_ENV_VAR,
};
