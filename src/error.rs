//! Engine errors
//!
//! Typed, recoverable errors for the guidance engine. Every failure is
//! surfaced to the caller; a failed mutation leaves all stores unchanged.

use thiserror::Error;

/// Errors that can occur during guidance engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuidanceError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid status value: {value}")]
    InvalidStatus { value: String },

    #[error("Invalid diagnostic input: {reason}")]
    InvalidDiagnosticInput { reason: String },
}

impl GuidanceError {
    /// Shorthand for an unknown-id lookup failure
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Convenience alias used across the engine
pub type Result<T> = std::result::Result<T, GuidanceError>;
