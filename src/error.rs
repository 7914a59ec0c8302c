//! Unified error hierarchy for trackrs
//!
//! Every failure that can surface while turning sensor packages into workout
//! summaries is a variant of [`TrackerError`], with severity and a
//! user-facing message attached.

use thiserror::Error;

use crate::models::WorkoutKind;

/// Top-level error type for all trackrs operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The package carries a workout code the tracker does not know
    #[error("Unrecognized workout type: {code}")]
    UnrecognizedWorkoutType { code: String },

    /// A calculation was requested from the bare readings record
    #[error("{operation} is not implemented for {training_type}")]
    NotImplemented {
        training_type: String,
        operation: String,
    },

    /// Wrong number of sensor values for the workout code
    #[error("{code} expects {expected} values, got {actual}")]
    ArgumentCount {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// A sensor value cannot be represented in its field
    #[error("Invalid value for {code}.{field}: {value}")]
    InvalidArgument {
        code: String,
        field: String,
        value: f64,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for trackrs operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub fn unrecognized(code: impl Into<String>) -> Self {
        TrackerError::UnrecognizedWorkoutType { code: code.into() }
    }

    pub fn not_implemented(training_type: impl Into<String>, operation: impl Into<String>) -> Self {
        TrackerError::NotImplemented {
            training_type: training_type.into(),
            operation: operation.into(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::UnrecognizedWorkoutType { .. } => ErrorSeverity::Warning,
            TrackerError::ArgumentCount { .. } => ErrorSeverity::Warning,
            TrackerError::InvalidArgument { .. } => ErrorSeverity::Warning,
            TrackerError::NotImplemented { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::UnrecognizedWorkoutType { code } => {
                let supported: Vec<&str> = WorkoutKind::ALL.iter().map(|k| k.code()).collect();
                format!(
                    "The tracker cannot process workout type '{}' yet (supported: {})",
                    code,
                    supported.join(", ")
                )
            }
            TrackerError::ArgumentCount {
                code,
                expected,
                actual,
            } => {
                format!(
                    "Package {} needs {} sensor values but {} were received",
                    code, expected, actual
                )
            }
            TrackerError::NotImplemented { .. } => {
                format!("Internal defect: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Programming defect
    Critical,
    /// Error that prevents the operation
    Error,
    /// Bad input from the caller
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
