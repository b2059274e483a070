//! Error types for selection persistence.
//!
//! This module defines [`SelectionError`], the error type returned by
//! preference backends and configuration loading, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Selection queries never fail; a missing handle or unset key is `None`
//! - `SelectionError` covers durable storage and configuration problems
//! - Use `anyhow::Error` (via `SelectionError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for selection persistence.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// The stored preference document could not be read back.
    #[error("Failed to parse preferences at {path}: {message}")]
    StateParse { path: PathBuf, message: String },

    /// The preference document could not be serialized.
    #[error("Failed to serialize preferences: {message}")]
    StateSerialize { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for selection persistence.
pub type Result<T> = std::result::Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SelectionError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = SelectionError::ConfigParse {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn state_parse_displays_path_and_message() {
        let err = SelectionError::StateParse {
            path: PathBuf::from("/state/preferences.yml"),
            message: "unknown field".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/state/preferences.yml"));
        assert!(msg.contains("unknown field"));
    }

    #[test]
    fn config_validation_displays_message() {
        let err = SelectionError::ConfigValidation {
            message: "domain must not be empty".into(),
        };
        assert!(err.to_string().contains("domain must not be empty"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SelectionError = io_err.into();
        assert!(matches!(err, SelectionError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: SelectionError = anyhow::anyhow!("backend went away").into();
        assert_eq!(err.to_string(), "backend went away");
    }
}
