//! Custom error types for saldo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for saldo operations
#[derive(Error, Debug)]
pub enum SaldoError {
    /// A persisted ledger row (or the header) could not be parsed.
    /// Fatal to startup; the file is never partially loaded.
    #[error("ledger parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// A candidate transaction violated the schema invariants
    #[error("validation error: {0}")]
    Validation(String),

    /// A removal position outside the ledger bounds
    #[error("invalid position {position}: ledger has {len} row(s)")]
    InvalidPosition { position: usize, len: usize },

    /// Persisting the ledger failed; memory and disk may now diverge
    #[error("write failure: {0}")]
    Write(String),

    /// File I/O errors outside the save path
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl SaldoError {
    /// Create a parse error for a ledger row (0 = header)
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for SaldoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaldoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for saldo operations
pub type SaldoResult<T> = Result<T, SaldoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = SaldoError::parse(3, "invalid amount 'abc'");
        assert_eq!(
            err.to_string(),
            "ledger parse error at row 3: invalid amount 'abc'"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_invalid_position_display() {
        let err = SaldoError::InvalidPosition { position: 5, len: 5 };
        assert_eq!(err.to_string(), "invalid position 5: ledger has 5 row(s)");
    }

    #[test]
    fn test_validation_helper() {
        let err = SaldoError::validation("amount must be positive");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "validation error: amount must be positive");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SaldoError = io_err.into();
        assert!(matches!(err, SaldoError::Io(_)));
    }
}
