//! Connection descriptor strings.
//!
//! Rendering per engine:
//! - SQL Server: `Server=host[:port];Database=db;User Id=user;Password=pw;`
//! - PostgreSQL / MySQL: `scheme://user:pw@host[:port]/db`
//! - Oracle: TNS descriptor with `HOST`, `PORT` (default 1521) and `SID`
//! - anything else: the URL form with the engine key as scheme

use crate::model::DataSourceInfo;

const ORACLE_DEFAULT_PORT: u16 = 1521;

/// Database engines with a dedicated connection string format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    /// Microsoft SQL Server
    SqlServer,
    PostgreSql,
    MySql,
    Oracle,
    /// Unrecognized engine key, rendered in URL form.
    Other(String),
}

impl Engine {
    /// Parse an engine key. Never fails; unknown keys become [`Engine::Other`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "sqlserver" | "mssql" | "sql_server" => Engine::SqlServer,
            "postgresql" | "postgres" | "pg" => Engine::PostgreSql,
            "mysql" | "mariadb" => Engine::MySql,
            "oracle" => Engine::Oracle,
            _ => Engine::Other(key.to_string()),
        }
    }

    /// Get the default port for this engine.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Engine::SqlServer => Some(1433),
            Engine::PostgreSql => Some(5432),
            Engine::MySql => Some(3306),
            Engine::Oracle => Some(ORACLE_DEFAULT_PORT),
            Engine::Other(_) => None,
        }
    }
}

/// Render the connection descriptor for `ds`.
///
/// The port segment is left out entirely when `ds.port` is absent, except for
/// Oracle which falls back to its default port.
pub fn create_connection_string(ds: &DataSourceInfo) -> String {
    match Engine::from_key(&ds.db_type) {
        Engine::SqlServer => build_sqlserver_connection_string(ds),
        Engine::Oracle => build_oracle_connection_string(ds),
        Engine::PostgreSql | Engine::MySql | Engine::Other(_) => build_url_connection_string(ds),
    }
}

fn host_with_port(ds: &DataSourceInfo) -> String {
    match ds.port {
        Some(port) => format!("{}:{}", ds.server, port),
        None => ds.server.clone(),
    }
}

fn password(ds: &DataSourceInfo) -> &str {
    ds.password.as_deref().unwrap_or("")
}

fn build_sqlserver_connection_string(ds: &DataSourceInfo) -> String {
    format!(
        "Server={};Database={};User Id={};Password={};",
        host_with_port(ds),
        ds.database,
        ds.username,
        password(ds)
    )
}

fn build_url_connection_string(ds: &DataSourceInfo) -> String {
    format!(
        "{}://{}:{}@{}/{}",
        ds.db_type,
        ds.username,
        password(ds),
        host_with_port(ds),
        ds.database
    )
}

fn build_oracle_connection_string(ds: &DataSourceInfo) -> String {
    let port = ds.port.unwrap_or(ORACLE_DEFAULT_PORT);
    format!(
        "User Id={};Password={};Data Source=(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST={})(PORT={}))(CONNECT_DATA=(SID={})));",
        ds.username,
        password(ds),
        ds.server,
        port,
        ds.database
    )
}
