//! Shared test helpers for in-memory integration tests.

use std::sync::{Arc, Mutex};

use autoproxy::config::RegistrarConfig;
use autoproxy::interception::{
    adapters::memory::{InMemoryCandidateScanner, InMemoryComponentRegistry, StaticEntryPoint},
    domain::{AnnotationAttributes, CandidateDescriptor, TypeKind, TypeRef},
    ports::{Component, ProxyFactory},
    services::ProxyRegistrar,
};
use rstest::fixture;

/// Marker used by the catalog fixtures.
pub const MARKER: &str = "ProxyTarget";

/// Annotation used by the entry point fixtures.
pub const ANNOTATION: &str = "EnableAutoProxy";

/// Registrar wired to in-memory adapters.
pub type TestRegistrar = ProxyRegistrar<InMemoryCandidateScanner, InMemoryComponentRegistry>;

/// Registrar plus handles on its collaborators.
pub struct Bootstrap {
    /// Catalog-backed scanner.
    pub scanner: Arc<InMemoryCandidateScanner>,
    /// Registry receiving the installer record.
    pub registry: Arc<InMemoryComponentRegistry>,
    /// Registrar under test.
    pub registrar: TestRegistrar,
}

/// Parses a type name, panicking on malformed input.
pub fn type_ref(name: &str) -> TypeRef {
    TypeRef::new(name).expect("valid type name")
}

/// Builds an entry point in `com.x.app` carrying the declaration.
pub fn entry_point(attributes: AnnotationAttributes) -> StaticEntryPoint {
    StaticEntryPoint::new(type_ref("com.x.app.Application")).with_annotation(ANNOTATION, attributes)
}

/// Builds a marker-carrying interface descriptor.
pub fn marked_interface(name: &str) -> CandidateDescriptor {
    CandidateDescriptor::marked_interface(type_ref(name), MARKER)
}

/// Builds an unmarked class descriptor.
pub fn plain_class(name: &str) -> CandidateDescriptor {
    CandidateDescriptor::new(type_ref(name), TypeKind::Class)
}

/// Converts string literals into an attribute list.
pub fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| (*value).to_owned()).collect())
}

/// Provides a registrar over an empty catalog.
#[fixture]
pub fn bootstrap() -> Bootstrap {
    let scanner = Arc::new(InMemoryCandidateScanner::new());
    let registry = Arc::new(InMemoryComponentRegistry::new());
    let registrar = ProxyRegistrar::new(
        Arc::clone(&scanner),
        Arc::clone(&registry),
        RegistrarConfig::default(),
    );
    Bootstrap {
        scanner,
        registry,
        registrar,
    }
}

/// Proxy standing in for a target instance.
#[derive(Debug)]
pub struct RecordedProxy {
    /// Type the proxy stands in for.
    pub target: TypeRef,
}

/// Proxy factory recording every type it wraps.
#[derive(Debug, Default)]
pub struct RecordingProxyFactory {
    wrapped: Mutex<Vec<TypeRef>>,
}

impl RecordingProxyFactory {
    /// Returns the types wrapped so far.
    pub fn wrapped(&self) -> Vec<TypeRef> {
        self.wrapped.lock().expect("lock not poisoned").clone()
    }
}

impl ProxyFactory for RecordingProxyFactory {
    fn wrap(&self, _instance: Component, type_ref: &TypeRef) -> Component {
        self.wrapped
            .lock()
            .expect("lock not poisoned")
            .push(type_ref.clone());
        Arc::new(RecordedProxy {
            target: type_ref.clone(),
        })
    }
}
