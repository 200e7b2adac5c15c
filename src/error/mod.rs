//! Error handling for the symptom matcher.
//!
//! Load-time failures are reported as [`DataLoadError`] and are fatal to the
//! catalog. Query-time "no results" is never an error.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors raised while loading a symptom catalog
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The catalog source does not exist
    #[error("Catalog source not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The catalog source exists but is not a regular file
    #[error("Catalog source is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// The catalog source could not be opened or read
    #[error("Failed to read catalog source {}: {context}", path.display())]
    Unreadable {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// The file extension is not one we know how to read
    #[error("Unsupported catalog format for {} (expected .csv or .parquet)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// No column is named "disease" (case-insensitive)
    #[error("Catalog is missing a disease column (found columns: {})", columns.join(", "))]
    MissingDiseaseColumn { columns: Vec<String> },

    /// Error decoding tabular data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error decoding a Parquet source
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

/// Top-level error type for the symptom matcher
#[derive(Debug, thiserror::Error)]
pub enum SymptomCheckerError {
    /// The catalog could not be loaded
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for symptom matcher operations
pub type Result<T> = std::result::Result<T, SymptomCheckerError>;
