//! Structured error types shared by every quantmd tier.
//!
//! The engine crates surface exactly two codes (`invalid_fraction` and
//! `empty_input`); the remaining codes belong to the CSV/CLI boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes for quantmd operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A fraction was supplied with a zero denominator.
    InvalidFraction,
    /// A statistic was requested over zero elements.
    EmptyInput,
    /// An argument could not be parsed (fraction literal, number, filter).
    InvalidInput,
    /// The requested column is not present in the input table.
    ColumnNotFound,
    /// I/O error while reading input.
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidFraction => write!(f, "invalid_fraction"),
            ErrorCode::EmptyInput => write!(f, "empty_input"),
            ErrorCode::InvalidInput => write!(f, "invalid_input"),
            ErrorCode::ColumnNotFound => write!(f, "column_not_found"),
            ErrorCode::IoError => write!(f, "io_error"),
        }
    }
}

/// Structured error carried on every fallible quantmd operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantmdError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl QuantmdError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an error with additional details.
    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// A fraction with a zero denominator.
    pub fn invalid_fraction(numerator: i64) -> Self {
        Self::new(
            ErrorCode::InvalidFraction,
            format!("Fraction {numerator}/0 has a zero denominator"),
        )
    }

    /// A statistic requested over an empty column.
    pub fn empty_input(operation: &str) -> Self {
        Self::new(
            ErrorCode::EmptyInput,
            format!("Cannot compute {operation} of an empty column"),
        )
    }

    /// An unparseable argument.
    pub fn invalid_input(what: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidInput, format!("Invalid input: {what}"))
    }

    /// A missing table column.
    pub fn column_not_found(column: &str) -> Self {
        Self::new(
            ErrorCode::ColumnNotFound,
            format!("Column not found: {column}"),
        )
    }

    /// An I/O failure.
    pub fn io_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("I/O error: {err}"))
    }

    /// Convert to JSON string.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for QuantmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for QuantmdError {}

impl From<std::io::Error> for QuantmdError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}
