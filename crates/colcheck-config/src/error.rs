//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a column schema document.
#[derive(Debug, Error)]
pub enum ConfigError {
    // === File System Errors ===
    /// Failed to open or read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The document is not well-formed YAML.
    #[error("failed to parse YAML config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // === Table Lookup Errors ===
    /// The requested table has no record in the document.
    #[error("table '{table}' not found in config (available: {available})")]
    TableNotFound { table: String, available: String },

    /// No table was named and the document does not resolve to a single table.
    #[error("config declares {count} tables; select one by name")]
    AmbiguousTable { count: usize },

    /// The table record has no `columns` field.
    #[error("table {table} has no 'columns' field")]
    MissingColumns { table: String },

    /// The table record or its `columns` field has the wrong shape.
    #[error("invalid record for table {table}: {reason}")]
    InvalidTable { table: String, reason: String },

    /// The `columns` field is an empty sequence.
    #[error("table {table} declares no columns")]
    EmptyColumns { table: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
