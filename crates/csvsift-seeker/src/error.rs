//! Error types for the seeker crate.

use thiserror::Error;

use crate::aggregate::Aggregate;

/// Errors that can occur when parsing or executing filters and aggregates.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Malformed `--filter` or `--agg` expression.
    #[error("invalid {kind} expression {input:?}: {reason}")]
    Syntax {
        kind: &'static str,
        input: String,
        reason: &'static str,
    },

    /// Operator token is not one of the supported comparisons.
    #[error("operator {0:?} is not supported (expected one of >, <, >=, <=, =, !=)")]
    UnknownOperator(String),

    /// Aggregator keyword is not one of the supported reductions.
    #[error("aggregation {0:?} is not supported (expected one of avg, min, max, sum, count)")]
    UnknownAggregate(String),

    /// A filter or aggregate referenced a column the data does not have.
    #[error("column {column:?} not found in CSV headers")]
    MissingField { column: String },

    /// Numeric aggregation hit a value that is not a number.
    #[error("non-numeric value {value:?} found in column {column:?}")]
    NonNumeric { column: String, value: String },

    /// Aggregation that needs at least one value got none.
    #[error("cannot compute {aggregate} of column {column:?}: no rows to aggregate")]
    EmptyInput {
        aggregate: Aggregate,
        column: String,
    },
}

impl SeekerError {
    pub(crate) fn syntax(kind: &'static str, input: &str, reason: &'static str) -> Self {
        SeekerError::Syntax {
            kind,
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn missing_field(column: &str) -> Self {
        SeekerError::MissingField {
            column: column.to_string(),
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
