//! Error types for the resistance evaluator.
//!
//! This module provides a unified error type [`ResistanceError`] that covers
//! circuit construction, fixture parsing and file I/O.

use thiserror::Error;

/// Result type alias using [`ResistanceError`].
pub type Result<T> = std::result::Result<T, ResistanceError>;

/// Unified error type for all resistance operations.
#[derive(Error, Debug)]
pub enum ResistanceError {
    // ============ Construction Errors ============
    /// Resistor value out of range
    #[error("Invalid resistor value {value}: value must be non-negative")]
    InvalidArgument { value: f64 },

    // ============ Fixture Parsing Errors ============
    /// Unrecognized circuit keyword
    #[error("Unknown circuit type '{name}' at line {line}, column {column}")]
    UnknownVariant {
        name: String,
        line: usize,
        column: usize,
    },

    /// Malformed token where a number or count was expected
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Circuit nested deeper than the parser allows
    #[error("Circuit nesting exceeds {limit} levels at line {line}, column {column}")]
    NestingTooDeep {
        limit: usize,
        line: usize,
        column: usize,
    },

    /// Input ended in the middle of a record
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    // ============ I/O Errors ============
    /// Error reading a fixture file
    #[error("Failed to read fixture file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResistanceError {
    /// Create a parse error
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an unknown variant error
    pub fn unknown_variant(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self::UnknownVariant {
            name: name.into(),
            line,
            column,
        }
    }

    /// Create an unexpected end of input error
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ResistanceError::InvalidArgument { value: -1.5 };
        let msg = err.to_string();
        assert!(msg.contains("-1.5"));
        assert!(msg.contains("must be non-negative"));
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = ResistanceError::unknown_variant("Capacitor", 3, 7);
        assert_eq!(
            err.to_string(),
            "Unknown circuit type 'Capacitor' at line 3, column 7"
        );
    }
}
