// ABOUTME: Unified error handling with typed error codes for all calculation engines
// ABOUTME: Maps engine failures onto JSON-RPC error codes for the MCP dispatch layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Running Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Cadence
//! MCP server. It defines standard error types, error codes, and JSON-RPC
//! response formatting to ensure consistent error handling across all
//! calculation engines and the dispatch layer.

use crate::constants::errors::{ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 1001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 1002,

    // Unit algebra (2000-2999)
    #[serde(rename = "UNSUPPORTED_UNIT")]
    UnsupportedUnit = 2000,
    #[serde(rename = "DIVISION_UNDEFINED")]
    DivisionUndefined = 2001,

    // Numerical computation (3000-3999)
    #[serde(rename = "CONVERGENCE_FAILED")]
    ConvergenceFailed = 3000,
    #[serde(rename = "INCONSISTENT_MARKER")]
    InconsistentMarker = 3001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the JSON-RPC error code for this error
    ///
    /// Caller-input problems map to the invalid-params family; computation
    /// and configuration failures map to the internal-error family.
    #[must_use]
    pub const fn rpc_code(self) -> i32 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::UnsupportedUnit
            | Self::DivisionUndefined => ERROR_INVALID_PARAMS,

            Self::ConvergenceFailed
            | Self::InconsistentMarker
            | Self::ConfigError
            | Self::InternalError => ERROR_INTERNAL_ERROR,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::UnsupportedUnit => "The requested unit is not supported",
            Self::DivisionUndefined => "The requested conversion would divide by zero",
            Self::ConvergenceFailed => "Numerical solver failed to converge",
            Self::InconsistentMarker => "Derived velocity markers violate their ordering",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the JSON-RPC error code for this error
    #[must_use]
    pub const fn rpc_code(&self) -> i32 {
        self.code.rpc_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Structured error payload attached to JSON-RPC error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Application error code (stable, machine-matchable)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {}", field.into()),
        )
    }

    /// Invalid format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Unsupported unit token
    pub fn unsupported_unit(token: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnsupportedUnit,
            format!(
                "Unknown unit: '{}'. Valid options: min_km, min_mile, kmh, mph",
                token.into()
            ),
        )
    }

    /// Division by zero during conversion or formatting
    pub fn division_undefined(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DivisionUndefined, message)
    }

    /// Solver failed to converge within its iteration budget
    pub fn convergence_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConvergenceFailed, message)
    }

    /// Velocity marker ordering violated (calibration defect, not user error)
    pub fn inconsistent_marker(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InconsistentMarker, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
