//! In-memory candidate scanner over a fixed type catalog.

use std::sync::{Arc, RwLock};

use crate::interception::{
    domain::{CandidateDescriptor, CandidateFilter, Namespace},
    ports::{CandidateScanner, ScanError, ScanResult},
};

/// Thread-safe candidate scanner over registered type descriptors.
///
/// Scans are recursive: a namespace covers its own types and those of every
/// descendant namespace. Each scanned namespace is recorded so callers can
/// assert which scans happened.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateScanner {
    state: Arc<RwLock<InMemoryScannerState>>,
}

#[derive(Debug, Default)]
struct InMemoryScannerState {
    catalog: Vec<CandidateDescriptor>,
    scanned: Vec<Namespace>,
}

impl InMemoryCandidateScanner {
    /// Creates a scanner with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner over the given catalog.
    #[must_use]
    pub fn with_candidates(candidates: impl IntoIterator<Item = CandidateDescriptor>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryScannerState {
                catalog: candidates.into_iter().collect(),
                scanned: Vec::new(),
            })),
        }
    }

    /// Adds a type descriptor to the catalog.
    ///
    /// # Errors
    ///
    /// Returns scanner errors when lock acquisition fails.
    pub fn add(&self, candidate: CandidateDescriptor) -> ScanResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ScanError::scanner(std::io::Error::other(err.to_string())))?;
        state.catalog.push(candidate);
        Ok(())
    }

    /// Returns the namespaces scanned so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns scanner errors when lock acquisition fails.
    pub fn scanned_namespaces(&self) -> ScanResult<Vec<Namespace>> {
        let state = self
            .state
            .read()
            .map_err(|err| ScanError::scanner(std::io::Error::other(err.to_string())))?;
        Ok(state.scanned.clone())
    }
}

impl CandidateScanner for InMemoryCandidateScanner {
    fn find_candidates(
        &self,
        namespace: &Namespace,
        filter: &CandidateFilter,
    ) -> ScanResult<Vec<CandidateDescriptor>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ScanError::scanner(std::io::Error::other(err.to_string())))?;
        state.scanned.push(namespace.clone());

        Ok(state
            .catalog
            .iter()
            .filter(|candidate| namespace.contains(candidate.qualified_name()))
            .filter(|candidate| filter.matches(candidate))
            .cloned()
            .collect())
    }
}
