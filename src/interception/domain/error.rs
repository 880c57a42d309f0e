//! Error types for interception domain validation.

use thiserror::Error;

/// Errors returned while constructing interception domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterceptionDomainError {
    /// The type name is empty after trimming.
    #[error("type name must not be empty")]
    EmptyTypeName,

    /// The type name contains whitespace or an empty dotted segment.
    #[error("type name '{0}' is not a valid qualified name")]
    InvalidTypeName(String),

    /// The namespace contains whitespace or an empty dotted segment.
    #[error("namespace '{0}' is not a valid namespace")]
    InvalidNamespace(String),
}
