// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for output-history
//!
//! Store operations surface failures as status strings; these types cover the
//! layers underneath them (settings, name validation, file removal).

use thiserror::Error;

/// Main error type for output-history operations
#[derive(Error, Debug)]
pub enum HistoryError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Base name that cannot address a file inside the output directory
    #[error("Invalid artifact name: {0:?}")]
    InvalidName(String),
}

/// Result type alias for output-history operations
pub type Result<T> = std::result::Result<T, HistoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_error_config() {
        let err = HistoryError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_history_error_invalid_name() {
        let err = HistoryError::InvalidName("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid artifact name: \"../etc\"");
    }

    #[test]
    fn test_history_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HistoryError = io_err.into();
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_history_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HistoryError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_history_error_debug() {
        let err = HistoryError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(HistoryError::InvalidName(String::new()))
        }

        assert!(test_fn().is_err());
    }
}
