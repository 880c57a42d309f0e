//! Host component registry port.

use crate::interception::domain::InstallerRegistration;
use std::sync::Arc;
use thiserror::Error;

/// Result type for component registry operations.
pub type ComponentRegistryResult<T> = Result<T, ComponentRegistryError>;

/// Application component registry receiving the installer record.
///
/// Duplicate-name handling is the implementation's policy.
pub trait ComponentRegistry: Send + Sync {
    /// Inserts `registration` under its name.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentRegistryError::DuplicateName`] when the registry
    /// rejects a second record under the same name, or
    /// [`ComponentRegistryError::Registry`] for other failures.
    fn register(&self, registration: &InstallerRegistration) -> ComponentRegistryResult<()>;
}

/// Errors returned by component registry implementations.
#[derive(Debug, Clone, Error)]
pub enum ComponentRegistryError {
    /// A component is already registered under this name.
    #[error("component already registered under name: {0}")]
    DuplicateName(String),

    /// Registry-layer failure.
    #[error("component registry error: {0}")]
    Registry(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComponentRegistryError {
    /// Wraps a registry failure.
    pub fn registry(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Registry(Arc::new(err))
    }
}
