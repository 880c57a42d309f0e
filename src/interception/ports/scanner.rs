//! Namespace scanning port.

use crate::interception::domain::{CandidateDescriptor, CandidateFilter, Namespace};
use std::sync::Arc;
use thiserror::Error;

/// Result type for namespace scans.
pub type ScanResult<T> = Result<T, ScanError>;

/// Primitive that enumerates type definitions below a namespace.
pub trait CandidateScanner: Send + Sync {
    /// Returns every definition in `namespace` (recursively) that passes
    /// `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] when the namespace cannot be enumerated.
    fn find_candidates(
        &self,
        namespace: &Namespace,
        filter: &CandidateFilter,
    ) -> ScanResult<Vec<CandidateDescriptor>>;
}

/// Errors returned by candidate scanner implementations.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// The namespace could not be enumerated.
    #[error("cannot scan namespace '{namespace}': {reason}")]
    Unreadable {
        /// Namespace being scanned.
        namespace: Namespace,
        /// Reason string.
        reason: String,
    },

    /// Generic scanner failure.
    #[error("candidate scan failed: {0}")]
    Scanner(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScanError {
    /// Wraps a scanner failure.
    pub fn scanner(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Scanner(Arc::new(err))
    }
}
