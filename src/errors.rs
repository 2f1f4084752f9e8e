// ABOUTME: Unified error handling for the runmetrics formula library
// ABOUTME: Defines standard error codes and the AppError type returned by every calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling
//!
//! Every calculation in this crate returns [`AppResult`]. Errors fall into a
//! small taxonomy: inputs that are structurally invalid (non-positive time,
//! resting HR above max HR), inputs that are valid numbers but outside a
//! formula's physiological domain (Cooper distance below the formula floor),
//! and internal numeric failures that indicate a bug rather than bad input.
//!
//! All errors are local to a single call; there is no shared state to corrupt.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Structurally invalid input (non-positive distance/time/weight, resting HR >= max HR)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input is a valid number but outside the formula's physiological domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Configuration value could not be interpreted
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Numeric failure that indicates a bug, not bad input
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a human-readable description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ValueOutOfRange => "Value outside formula domain",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal error",
        }
    }
}

/// Error type returned by every fallible calculation in the library
#[derive(Debug, Error)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message describing the rejected value
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Structurally invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Valid number outside the formula's physiological domain
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal numeric failure (indicates a bug, not bad input)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
