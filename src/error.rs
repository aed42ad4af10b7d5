//! Error handling for tfreduce
//!
//! Reduction is pure arithmetic, so most errors are precondition violations
//! raised at the call site. Configuration loading adds the usual I/O and
//! parsing failures.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for tfreduce operations
pub type Result<T> = std::result::Result<T, ReduceError>;

/// Which element list an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Pole,
    Zero,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Pole => write!(f, "pole"),
            ElementKind::Zero => write!(f, "zero"),
        }
    }
}

/// Main error type for tfreduce operations
#[derive(Error, Debug)]
pub enum ReduceError {
    // Precondition Errors
    #[error("{kind} index {index} out of bounds (length {len})")]
    IndexOutOfBounds {
        kind: ElementKind,
        index: usize,
        len: usize,
    },

    #[error("{operation} requires at least one pole")]
    NoPoles { operation: &'static str },

    // Resolver Errors
    #[error("Positive zero resolution exceeded {limit} iterations ({remaining} positive zeros left)")]
    IterationLimit { limit: usize, remaining: usize },

    #[error("No cancellation rule matches delay={delay}, pole={pole}, zero={zero}")]
    UnclassifiedCancellation { delay: f64, pole: f64, zero: f64 },

    // Configuration Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReduceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ReduceError::IndexOutOfBounds { .. } => "INDEX_OUT_OF_BOUNDS",
            ReduceError::NoPoles { .. } => "NO_POLES",
            ReduceError::IterationLimit { .. } => "ITERATION_LIMIT",
            ReduceError::UnclassifiedCancellation { .. } => "UNCLASSIFIED_CANCELLATION",
            ReduceError::InvalidConfig { .. } => "INVALID_CONFIG",
            ReduceError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ReduceError::Io(_) => "IO_ERROR",
            ReduceError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by changing inputs or settings
    ///
    /// Index and pole-count violations are programming errors and are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReduceError::IterationLimit { .. }
                | ReduceError::UnclassifiedCancellation { .. }
                | ReduceError::InvalidConfig { .. }
                | ReduceError::ConfigNotFound { .. }
        )
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            ReduceError::NoPoles { .. } => Some("Supply at least one pole, e.g. --poles 1"),
            ReduceError::IterationLimit { .. } => {
                Some("Raise max_iterations in the reduction config.")
            }
            ReduceError::UnclassifiedCancellation { .. } => Some(
                "Check the model for NaN values, or set unclassified to \"drop_zero\".",
            ),
            ReduceError::InvalidConfig { .. } => Some("Fix the reduction config and try again."),
            ReduceError::ConfigNotFound { .. } => Some("Check the config file path."),
            _ => None,
        }
    }
}
