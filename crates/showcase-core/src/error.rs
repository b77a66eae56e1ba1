//! Error types for the showcase core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by the layer that raises them
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ─────────────────────────────────────────────────────────────
    // Data Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Extension data file not found: {path}")]
    DataFileNotFound { path: PathBuf },

    #[error("Extension data is malformed: {message}")]
    MalformedData { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn data_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DataFileNotFound { path: path.into() }
    }

    pub fn malformed_data(message: impl Into<String>) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error means "no data" rather than "bad data".
    ///
    /// Loaders log the former as a warning and the latter as an error.
    pub fn is_missing_data(&self) -> bool {
        match self {
            Error::DataFileNotFound { .. } => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::data_file_not_found("/srv/data/extensions.json");
        assert_eq!(
            err.to_string(),
            "Extension data file not found: /srv/data/extensions.json"
        );

        let err = Error::malformed_data("expected an array");
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn test_is_missing_data() {
        assert!(Error::data_file_not_found("/x").is_missing_data());
        assert!(Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).is_missing_data());
        assert!(
            !Error::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"))
                .is_missing_data()
        );
        assert!(!Error::malformed_data("bad").is_missing_data());
        assert!(!Error::config("bad").is_missing_data());
    }
}
