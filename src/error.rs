// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for marfil
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for marfil operations
#[derive(Error, Debug)]
pub enum MarfilError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scaffold entry could not be created
    #[error("Scaffold error at {}: {source}", .path.display())]
    Scaffold {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for marfil operations
pub type Result<T> = std::result::Result<T, MarfilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marfil_error_config() {
        let err = MarfilError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_marfil_error_invalid_input() {
        let err = MarfilError::InvalidInput("bad input".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_marfil_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MarfilError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_marfil_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: MarfilError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_marfil_error_scaffold_mentions_path() {
        let err = MarfilError::Scaffold {
            path: PathBuf::from("DARK SITE/FAIRY BLACK"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("FAIRY BLACK"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_marfil_error_debug() {
        let err = MarfilError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(MarfilError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}
