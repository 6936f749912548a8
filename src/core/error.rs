//! Error types for the split search.
//!
//! A feature (or a whole node) that admits no valid split is *not* an error:
//! it is reported as `Ok(None)`. Everything in this module describes a broken
//! precondition or a failing collaborator, both of which abort the search.

use crate::core::types::FeatureIndex;
use std::io;
use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Numerical computation errors (NaN reductions and the like)
    #[error("Numerical error: {message}")]
    Numerical { message: String },

    /// The per-feature evaluator failed for one feature
    #[error("Evaluation of feature {feature} failed: {message}")]
    FeatureEvaluation {
        feature: FeatureIndex,
        message: String,
    },

    /// Thread pool construction errors
    #[error("Threading error: {message}")]
    Threading { message: String },

    /// Configuration serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using SplitterError
pub type Result<T> = std::result::Result<T, SplitterError>;

impl SplitterError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        SplitterError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        SplitterError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        SplitterError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        SplitterError::IndexOutOfBounds { index, length }
    }

    /// Create a numerical error
    pub fn numerical<S: Into<String>>(message: S) -> Self {
        SplitterError::Numerical {
            message: message.into(),
        }
    }

    /// Create an error reported by a per-feature evaluator
    pub fn feature_evaluation<S: Into<String>>(feature: FeatureIndex, message: S) -> Self {
        SplitterError::FeatureEvaluation {
            feature,
            message: message.into(),
        }
    }

    /// Create a threading error
    pub fn threading<S: Into<String>>(message: S) -> Self {
        SplitterError::Threading {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        SplitterError::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        SplitterError::Internal {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the caller's inputs rather than by
    /// the evaluator or the runtime.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            SplitterError::Config { .. }
                | SplitterError::InvalidParameter { .. }
                | SplitterError::DimensionMismatch { .. }
                | SplitterError::IndexOutOfBounds { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SplitterError::Config { .. } => "config",
            SplitterError::InvalidParameter { .. } => "invalid_parameter",
            SplitterError::DimensionMismatch { .. } => "dimension_mismatch",
            SplitterError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            SplitterError::Numerical { .. } => "numerical",
            SplitterError::FeatureEvaluation { .. } => "feature_evaluation",
            SplitterError::Threading { .. } => "threading",
            SplitterError::Serialization { .. } => "serialization",
            SplitterError::Io { .. } => "io",
            SplitterError::Internal { .. } => "internal",
        }
    }
}

/// Early-return with an error when a condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SplitterError::config("test configuration error");
        assert_eq!(err.category(), "config");
        assert!(err.is_precondition_violation());

        let err = SplitterError::feature_evaluation(3, "evaluator blew up");
        assert_eq!(err.category(), "feature_evaluation");
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn test_ensure_macro() {
        fn check(len: usize) -> Result<()> {
            ensure!(len > 0, SplitterError::index_out_of_bounds(0, len));
            Ok(())
        }

        assert!(check(1).is_ok());
        assert!(matches!(
            check(0),
            Err(SplitterError::IndexOutOfBounds { index: 0, length: 0 })
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = SplitterError::dimension_mismatch("labels of length 4", "probs of length 3");
        assert_eq!(err.category(), "dimension_mismatch");
        assert!(err.is_precondition_violation());
        assert!(err.to_string().contains("probs of length 3"));
    }

    #[test]
    fn test_error_display() {
        let err = SplitterError::feature_evaluation(7, "no values");
        let error_string = format!("{}", err);
        assert!(error_string.contains("feature 7"));
        assert!(error_string.contains("no values"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SplitterError = io_err.into();
        assert!(matches!(err, SplitterError::Io { .. }));
        assert_eq!(err.category(), "io");
    }
}
