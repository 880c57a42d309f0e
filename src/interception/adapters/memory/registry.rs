//! In-memory component registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::interception::{
    domain::InstallerRegistration,
    ports::{ComponentRegistry, ComponentRegistryError, ComponentRegistryResult},
};

/// Thread-safe in-memory component registry.
///
/// A second record under an existing name is rejected with
/// [`ComponentRegistryError::DuplicateName`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentRegistry {
    state: Arc<RwLock<HashMap<String, InstallerRegistration>>>,
}

impl InMemoryComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a record by registry name.
    ///
    /// # Errors
    ///
    /// Returns registry errors when lock acquisition fails.
    pub fn find_by_name(&self, name: &str) -> ComponentRegistryResult<Option<InstallerRegistration>> {
        let state = self.state.read().map_err(|err| {
            ComponentRegistryError::registry(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(name).cloned())
    }

    /// Returns every record, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns registry errors when lock acquisition fails.
    pub fn list_all(&self) -> ComponentRegistryResult<Vec<InstallerRegistration>> {
        let state = self.state.read().map_err(|err| {
            ComponentRegistryError::registry(std::io::Error::other(err.to_string()))
        })?;
        let mut all: Vec<InstallerRegistration> = state.values().cloned().collect();
        all.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(all)
    }
}

impl ComponentRegistry for InMemoryComponentRegistry {
    fn register(&self, registration: &InstallerRegistration) -> ComponentRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ComponentRegistryError::registry(std::io::Error::other(err.to_string()))
        })?;

        if state.contains_key(registration.name()) {
            return Err(ComponentRegistryError::DuplicateName(
                registration.name().to_owned(),
            ));
        }

        state.insert(registration.name().to_owned(), registration.clone());
        Ok(())
    }
}
