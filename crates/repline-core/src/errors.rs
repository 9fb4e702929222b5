// ABOUTME: Unified error handling system for the Repline fitness tracker
// ABOUTME: Defines standard error codes and the AppError type used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for Repline.
//! It defines standard error types and error codes to ensure consistent
//! error handling across all modules. Every command handler returns
//! [`AppResult`]; the REPL reports the error and continues the session.

use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed command that no more specific code covers
    InvalidInput = 3000,
    /// A required flag is absent or has no value
    MissingRequiredField = 3001,
    /// A value failed to parse as its declared type (number, date)
    InvalidFormat = 3002,
    /// Cross-field value counts disagree (weights vs reps vs sets)
    ArityMismatch = 3003,

    // Activity management (4000-4999)
    /// Referenced exercise or workout is not in the store
    ActivityNotFound = 4000,
    /// Target day slot is already occupied
    ActivityExists = 4001,
    /// The store refused an add (duplicate name)
    ActivityAddFailed = 4002,

    // Configuration (6000-6999)
    /// Configuration error encountered
    ConfigError = 6000,

    // Internal errors (9000-9999)
    /// An unexpected internal error occurred
    InternalError = 9000,
    /// Reading or writing the snapshot file failed
    StorageError = 9002,
    /// Snapshot serialization/deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required flag is missing from the command",
            Self::InvalidFormat => "The value format is invalid",
            Self::ArityMismatch => "The provided value counts do not agree",
            Self::ActivityNotFound => "The requested activity was not found",
            Self::ActivityExists => "An activity is already assigned to this slot",
            Self::ActivityAddFailed => "The activity could not be added",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this error was caused by user input rather than the system.
    ///
    /// User errors are reported without a log entry; system errors are also
    /// logged at warn level by the REPL driver.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ArityMismatch
                | Self::ActivityNotFound
                | Self::ActivityExists
                | Self::ActivityAddFailed
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required flag missing
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Value failed type parsing
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Cross-field count mismatch
    pub fn arity_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArityMismatch, message)
    }

    /// Activity not found in the store
    pub fn not_found(activity: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ActivityNotFound,
            format!("Activity '{}' does not exist", activity.into()),
        )
    }

    /// Day slot already occupied
    pub fn already_assigned(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ActivityExists, message)
    }

    /// Store refused an add
    pub fn add_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ActivityAddFailed, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert!(ErrorCode::InvalidInput.is_user_error());
        assert!(ErrorCode::ActivityNotFound.is_user_error());
        assert!(!ErrorCode::StorageError.is_user_error());
        assert!(!ErrorCode::InternalError.is_user_error());
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::not_found("benchpress");
        assert_eq!(error.code, ErrorCode::ActivityNotFound);
        assert_eq!(error.to_string(), "Activity 'benchpress' does not exist");
    }

    #[test]
    fn test_app_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = AppError::storage("failed to read snapshot").with_source(io);
        assert!(std::error::Error::source(&error).is_some());
    }
}
