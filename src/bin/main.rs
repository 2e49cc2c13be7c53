//! reportkit CLI - validate and inspect report definitions
//!
//! Usage:
//!   reportkit validate <file> --kind <entity>
//!   reportkit normalize-type <raw>...
//!   reportkit schema-summary <file>
//!   reportkit connection-string [<file>] [--connection <name>]
//!   reportkit operators <type>
//!   reportkit check-filter <file>
//!   reportkit serialize <file>
//!
//! Examples:
//!   reportkit validate report.json --kind report
//!   reportkit normalize-type "varchar(50)" int8 datetime2
//!   reportkit connection-string --connection warehouse

use clap::{Parser, Subcommand, ValueEnum};
use reportkit::config::{LogFormat, LoggingSettings, Settings};
use reportkit::filter::{
    available_operators, default_operator, describe_filter, operator_phrase, validate_filter,
};
use reportkit::loader::{from_document, load_document, LoadError};
use reportkit::model::{
    normalize_schema, normalize_type, DataSourceInfo, FieldDataType, FilterOperator, FilterValue,
    ReportDefinition, SchemaInfo, SelectedField,
};
use reportkit::transform::{
    count_schema_columns, create_connection_string, get_tables_with_foreign_keys,
    get_unique_data_types, serialize_report_definition,
};
use reportkit::validation::{self, EntityValidator};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(about = "reportkit - validate, normalize and inspect ad-hoc report definitions")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $REPORTKIT_CONFIG, ./reportkit.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Structurally validate a JSON or TOML document
    Validate {
        file: PathBuf,

        /// Entity the document is expected to be
        #[arg(short, long, default_value = "report")]
        kind: EntityKind,
    },

    /// Map raw database type strings to semantic field types
    NormalizeType {
        #[arg(required = true)]
        raw: Vec<String>,
    },

    /// Normalize a schema snapshot and print aggregate facts about it
    SchemaSummary { file: PathBuf },

    /// Print the connection string for a data source file or named connection
    ConnectionString {
        file: Option<PathBuf>,

        /// Named connection from the config file
        #[arg(short, long, conflicts_with = "file")]
        connection: Option<String>,
    },

    /// List the filter operators offered for a field type
    Operators { field_type: String },

    /// Check a (possibly incomplete) filter condition
    CheckFilter { file: PathBuf },

    /// Print the storage projection of a report definition
    Serialize { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityKind {
    DataSource,
    Schema,
    Table,
    Column,
    Relationship,
    Report,
    SelectedField,
    Filter,
    Sort,
    GroupBy,
    Parameter,
}

impl EntityKind {
    fn validator(self) -> EntityValidator {
        match self {
            EntityKind::DataSource => validation::validate_data_source_info,
            EntityKind::Schema => validation::validate_schema_info,
            EntityKind::Table => validation::validate_table_info,
            EntityKind::Column => validation::validate_column_info,
            EntityKind::Relationship => validation::validate_relationship,
            EntityKind::Report => validation::validate_report_definition,
            EntityKind::SelectedField => validation::validate_selected_field,
            EntityKind::Filter => validation::validate_filter_condition,
            EntityKind::Sort => validation::validate_sort_field,
            EntityKind::GroupBy => validation::validate_group_by_field,
            EntityKind::Parameter => validation::validate_report_parameter,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&settings.logging);

    match cli.command {
        Commands::Validate { file, kind } => cmd_validate(&file, kind),
        Commands::NormalizeType { raw } => cmd_normalize_type(&raw),
        Commands::SchemaSummary { file } => cmd_schema_summary(&file),
        Commands::ConnectionString { file, connection } => {
            cmd_connection_string(&settings, file.as_deref(), connection.as_deref())
        }
        Commands::Operators { field_type } => cmd_operators(&field_type),
        Commands::CheckFilter { file } => cmd_check_filter(&settings, &file),
        Commands::Serialize { file } => cmd_serialize(&file),
    }
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn load(file: &Path) -> Result<Value, ExitCode> {
    load_document(file).map_err(|e| report_load_error(&e))
}

fn report_load_error(e: &LoadError) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}

/// Validate `document` and deserialize it, printing errors on failure.
fn load_valid<T: serde::de::DeserializeOwned>(
    file: &Path,
    validator: EntityValidator,
    kind: &'static str,
) -> Result<T, ExitCode> {
    let document = load(file)?;
    let errors = validator(&document);
    if !errors.is_empty() {
        print_errors(file, &errors);
        return Err(ExitCode::FAILURE);
    }
    from_document(document, &file.display().to_string(), kind).map_err(|e| report_load_error(&e))
}

fn print_errors(file: &Path, errors: &[String]) {
    eprintln!("{}: {} error(s)", file.display(), errors.len());
    for error in errors {
        eprintln!("  - {}", error);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(file: &Path, kind: EntityKind) -> ExitCode {
    let document = match load(file) {
        Ok(document) => document,
        Err(code) => return code,
    };

    let errors = kind.validator()(&document);
    if errors.is_empty() {
        println!("OK: {} is valid", file.display());
        ExitCode::SUCCESS
    } else {
        print_errors(file, &errors);
        ExitCode::FAILURE
    }
}

fn cmd_normalize_type(raw: &[String]) -> ExitCode {
    for raw_type in raw {
        println!("{}\t{}", raw_type, normalize_type(raw_type));
    }
    ExitCode::SUCCESS
}

fn cmd_schema_summary(file: &Path) -> ExitCode {
    let schema: SchemaInfo = match load_valid(file, validation::validate_schema_info, "SchemaInfo") {
        Ok(schema) => schema,
        Err(code) => return code,
    };
    let schema = normalize_schema(&schema);

    println!("Tables: {}", schema.tables.len());
    println!("Columns: {}", count_schema_columns(&schema));
    println!("Data types: {}", get_unique_data_types(&schema).join(", "));

    let fk_tables = get_tables_with_foreign_keys(&schema);
    if fk_tables.is_empty() {
        println!("Tables with foreign keys: none");
    } else {
        println!("Tables with foreign keys: {}", fk_tables.join(", "));
    }
    println!();

    for table in &schema.tables {
        println!("{}:", table.name);
        for column in &table.columns {
            let normalized = column.normalized_type.map(|t| t.as_str()).unwrap_or("?");
            println!("  - {} ({} -> {})", column.name, column.data_type, normalized);
        }
    }
    ExitCode::SUCCESS
}

fn cmd_connection_string(settings: &Settings, file: Option<&Path>, connection: Option<&str>) -> ExitCode {
    let ds: DataSourceInfo = match (file, connection) {
        (_, Some(name)) => match settings.data_source(name) {
            Ok(ds) => ds,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        (Some(file), None) => {
            match load_valid(file, validation::validate_data_source_info, "DataSourceInfo") {
                Ok(ds) => ds,
                Err(code) => return code,
            }
        }
        (None, None) => {
            eprintln!("Error: pass a data source file or --connection <name>");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", create_connection_string(&ds));
    ExitCode::SUCCESS
}

fn cmd_operators(field_type: &str) -> ExitCode {
    let Some(field_type) = FieldDataType::from_str(field_type) else {
        let known: Vec<_> = FieldDataType::ALL.iter().map(|t| t.as_str()).collect();
        eprintln!("Unknown field type '{}'. Expected one of: {}", field_type, known.join(", "));
        return ExitCode::FAILURE;
    };

    let default = default_operator(field_type);
    for operator in available_operators(field_type) {
        let marker = if operator == default { " (default)" } else { "" };
        println!("{:<14} {}{}", operator.as_str(), operator_phrase(operator), marker);
    }
    ExitCode::SUCCESS
}

/// The document may be incomplete; missing or unreadable parts are treated
/// as not entered yet.
fn cmd_check_filter(settings: &Settings, file: &Path) -> ExitCode {
    let document = match load(file) {
        Ok(document) => document,
        Err(code) => return code,
    };

    let field: Option<SelectedField> = document
        .get("field")
        .and_then(|f| serde_json::from_value(f.clone()).ok());
    let operator = document
        .get("operator")
        .and_then(Value::as_str)
        .and_then(FilterOperator::from_str);
    let value: Option<FilterValue> = document
        .get("value")
        .filter(|v| !v.is_null())
        .and_then(|v| serde_json::from_value(v.clone()).ok());

    let result = validate_filter(field.as_ref(), operator, value.as_ref());
    if let (Some(field), Some(operator)) = (&field, operator) {
        println!("{}", describe_filter(field, operator, value.as_ref(), &settings.display));
    }

    match result.message {
        None => {
            println!("OK: filter is valid");
            ExitCode::SUCCESS
        }
        Some(message) => {
            eprintln!("Invalid filter: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn cmd_serialize(file: &Path) -> ExitCode {
    let report: ReportDefinition =
        match load_valid(file, validation::validate_report_definition, "ReportDefinition") {
            Ok(report) => report,
            Err(code) => return code,
        };
    print_json(&serialize_report_definition(&report))
}
