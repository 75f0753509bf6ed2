//! Error types for the planner crate.

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing filters, sorting, or editing a game list.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Malformed filter clause: no operator, unknown field, or bad token count.
    #[error("invalid filter clause '{clause}': {reason}")]
    Parse { clause: String, reason: String },

    /// Clause value could not be converted to the field's numeric type.
    #[error("cannot parse '{value}' as a value for {field}: {source}")]
    Format {
        field: &'static str,
        value: String,
        #[source]
        source: NumberParseError,
    },

    /// Operator is not defined for the given field.
    #[error("operator '{op}' is not supported for field {field}")]
    UnsupportedOperation {
        field: &'static str,
        op: &'static str,
    },

    /// Clause value type does not match the field type.
    #[error("type mismatch: field expects {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Missing sort key, unrecognized selector, reversed range, or nothing to remove.
    #[error("{0}")]
    InvalidArgument(String),

    /// Selector index or range start outside the current bounds.
    #[error("index {index} out of range (1..={len})")]
    Index { index: usize, len: usize },

    /// Writing the game list failed.
    #[error("failed to write game list to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the game collection failed.
    #[error("failed to load games: {0}")]
    Csv(#[from] csv::Error),
}

/// Underlying numeric parse failure for [`PlannerError::Format`].
#[derive(Debug, Error)]
pub enum NumberParseError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

impl PlannerError {
    /// Create a parse error for a clause.
    pub fn parse(clause: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            clause: clause.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
