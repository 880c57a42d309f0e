//! Port contracts for proxy target discovery and installer registration.
//!
//! Ports define the collaborators the registrar needs: entry-point
//! introspection, namespace scanning, the host component registry, and the
//! decorate-on-construction capability.

pub mod metadata;
pub mod proxy;
pub mod registry;
pub mod scanner;

pub use metadata::EntryPointMetadata;
pub use proxy::{Component, ConstructionHook, ProxyFactory};
pub use registry::{ComponentRegistry, ComponentRegistryError, ComponentRegistryResult};
pub use scanner::{CandidateScanner, ScanError, ScanResult};

