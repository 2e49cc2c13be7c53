//! Reading candidate documents from disk.
//!
//! Currently supports:
//! - **JSON** (.json)
//! - **TOML** (.toml)
//!
//! Documents are returned as untyped [`serde_json::Value`] so that they can be
//! handed to the structural validators before anything is deserialized.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when loading a document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported file extension: {extension}. Supported: .json, .toml")]
    UnsupportedExtension { extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("TOML error in {file}: {source}")]
    Toml {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// The document parsed but does not have the requested shape.
    #[error("{file} is not a valid {kind}: {source}")]
    Shape {
        file: String,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Load a document, choosing the parser from the file extension.
pub fn load_document(path: &Path) -> LoadResult<Value> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file = path.display().to_string();
    tracing::debug!(%file, extension, "loading document");

    let content = fs::read_to_string(path)?;
    match extension {
        "json" => load_document_from_str(&content, &file),
        "toml" => toml::from_str(&content).map_err(|source| LoadError::Toml { file, source }),
        _ => Err(LoadError::UnsupportedExtension {
            extension: extension.to_string(),
        }),
    }
}

/// Parse a JSON document held in memory; `file` names it in errors.
pub fn load_document_from_str(content: &str, file: &str) -> LoadResult<Value> {
    serde_json::from_str(content).map_err(|source| LoadError::Json {
        file: file.to_string(),
        source,
    })
}

/// Deserialize an already-loaded document into a typed model value.
pub fn from_document<T: DeserializeOwned>(document: Value, file: &str, kind: &'static str) -> LoadResult<T> {
    serde_json::from_value(document).map_err(|source| LoadError::Shape {
        file: file.to_string(),
        kind,
        source,
    })
}
