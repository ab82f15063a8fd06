//! Error types for purposeviz
//!
//! Library code returns [`ReportError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for purposeviz operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Main error type for purposeviz operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input directory missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file or directory could not be read
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A purpose file is not valid JSON or does not have the record shape
    #[error("invalid purpose record in {file}: {message}")]
    InvalidRecord {
        file: PathBuf,
        /// 1-based line of the JSON error, when known
        line: Option<usize>,
        message: String,
    },

    /// A record that survived filtering lacks a field the report needs
    #[error("missing required field '{field}' in {record}")]
    MissingField { field: String, record: String },

    /// Malformed configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl ReportError {
    /// File the error points at, when there is one.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            ReportError::DirectoryNotFound { path } | ReportError::ReadFile { path, .. } => {
                Some(path)
            }
            ReportError::InvalidRecord { file, .. } | ReportError::InvalidConfig { file, .. } => {
                Some(file)
            }
            ReportError::Io(_) | ReportError::MissingField { .. } => None,
        }
    }

    /// Line within [`ReportError::file`] the error points at, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ReportError::InvalidRecord { line, .. } => *line,
            _ => None,
        }
    }
}
