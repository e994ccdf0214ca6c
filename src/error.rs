//! Error types for the release desk

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, RelmanError>;

/// Errors raised by form validation and the storage adapters
#[derive(Debug, Error)]
pub enum RelmanError {
    /// Version is not `digits.digits.digits`
    #[error("invalid version '{0}': must be in format digits.digits.digits (e.g. 3.99.1)")]
    InvalidVersion(String),

    /// JSMOPS ticket number is not all digits
    #[error("invalid JSMOPS ticket number '{0}': must contain digits only")]
    InvalidJsmops(String),

    /// Date is not an ISO calendar date
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Reading or writing a state file failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The persisted checklist record could not be encoded or decoded
    #[error("malformed checklist record: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML file could not be decoded
    #[error("malformed TOML in {}: {source}", path.display())]
    TomlDecode {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A TOML document could not be encoded
    #[error("failed to encode TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

impl RelmanError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
