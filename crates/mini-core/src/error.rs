//! Centralized error types for Mini.

use thiserror::Error;

use crate::component::ComponentKind;

/// Main error type for Mini operations.
#[derive(Error, Debug)]
pub enum MiniError {
    #[error("Component not found: {kind}:{name}")]
    ComponentNotFound { kind: ComponentKind, name: String },

    #[error("Component '{key}' is registered with '{found}', expected {expected}")]
    ImplementationMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown component kind: {0}")]
    UnknownKind(String),

    #[error("Job '{job}' failed: {reason}")]
    JobFailed { job: String, reason: String },

    #[error("Feature '{feature}' failed: {reason}")]
    FeatureFailed { feature: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Mini operations.
pub type MiniResult<T> = Result<T, MiniError>;

impl MiniError {
    /// Create a not found error for a `(kind, name)` lookup.
    pub fn not_found(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self::ComponentNotFound {
            kind,
            name: name.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a job failure.
    pub fn job_failed(job: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::JobFailed {
            job: job.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a feature failure.
    pub fn feature_failed(feature: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::FeatureFailed {
            feature: feature.into(),
            reason: reason.to_string(),
        }
    }
}
