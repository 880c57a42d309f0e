//! Service layer for proxy target discovery and installer registration.
//!
//! Provides [`ProxyRegistrar`], which runs one registration pass per
//! application bootstrap: it reads the entry point's declaration, resolves
//! the target set (explicit list or namespace scan) and inserts a single
//! installer record into the host registry.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::RegistrarConfig;
use crate::interception::{
    domain::{
        CandidateFilter, InstallerRegistration, InstallerType, InterceptionDomainError,
        Namespace, NamespaceSet, ProxyDeclaration, RegistrationOutcome, TargetSet, TypeRef,
    },
    ports::{
        CandidateScanner, ComponentRegistry, ComponentRegistryError, EntryPointMetadata,
        ScanError,
    },
};

/// Service-level errors for a registration pass.
///
/// Every variant aborts the pass before the registry is touched, except
/// [`ProxyRegistrarError::Registry`], which is the registry's own rejection.
#[derive(Debug, Error)]
pub enum ProxyRegistrarError {
    /// The declaration holds a malformed name.
    #[error(transparent)]
    Domain(#[from] InterceptionDomainError),

    /// A scanned type carrying the marker is not an interface.
    #[error("@{marker} can only be specified on an interface: {type_ref}")]
    NotAnInterface {
        /// Offending type.
        type_ref: TypeRef,
        /// Marker it carries.
        marker: String,
    },

    /// The scan primitive failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The registry rejected the installer record.
    #[error(transparent)]
    Registry(#[from] ComponentRegistryError),
}

/// Result type for registrar operations.
pub type ProxyRegistrarResult<T> = Result<T, ProxyRegistrarError>;

/// Bootstrap-time registrar for the proxy installer.
#[derive(Clone)]
pub struct ProxyRegistrar<S, R>
where
    S: CandidateScanner,
    R: ComponentRegistry,
{
    scanner: Arc<S>,
    registry: Arc<R>,
    config: RegistrarConfig,
}

impl<S, R> ProxyRegistrar<S, R>
where
    S: CandidateScanner,
    R: ComponentRegistry,
{
    /// Creates a registrar.
    #[must_use]
    pub const fn new(scanner: Arc<S>, registry: Arc<R>, config: RegistrarConfig) -> Self {
        Self {
            scanner,
            registry,
            config,
        }
    }

    /// Returns the registrar configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Runs a registration pass for `entry_point`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyRegistrarError`] when the declaration is malformed, a
    /// scanned target is not an interface, the scan fails, or the registry
    /// rejects the record. Nothing is registered on error.
    pub fn register_proxies(
        &self,
        entry_point: &impl EntryPointMetadata,
    ) -> ProxyRegistrarResult<RegistrationOutcome> {
        let Some(attributes) = entry_point.annotation_attributes(&self.config.annotation, true)
        else {
            debug!(
                entry_point = %entry_point.type_name(),
                annotation = %self.config.annotation,
                "entry point carries no proxy declaration"
            );
            return Ok(RegistrationOutcome::NotDeclared);
        };

        let declaration = ProxyDeclaration::from_attributes(attributes)?;
        self.register_declaration(&declaration, entry_point.type_name())
    }

    /// Runs a registration pass for an already typed declaration.
    ///
    /// # Errors
    ///
    /// See [`ProxyRegistrar::register_proxies`].
    pub fn register_declaration(
        &self,
        declaration: &ProxyDeclaration,
        entry_point: &TypeRef,
    ) -> ProxyRegistrarResult<RegistrationOutcome> {
        if !declaration.enabled() {
            debug!(entry_point = %entry_point, "proxy registration disabled");
            return Ok(RegistrationOutcome::Disabled);
        }

        let targets = self.resolve_targets(declaration, entry_point)?;
        if targets.is_empty() {
            debug!(entry_point = %entry_point, "no proxy targets found");
            return Ok(RegistrationOutcome::NoTargets);
        }

        let registration = InstallerRegistration::new(
            self.config.registration_name.as_str(),
            InstallerType::new(self.config.installer_type.as_str()),
            &targets,
        );
        self.registry.register(&registration)?;

        info!(
            name = registration.name(),
            installer = %registration.installer(),
            targets = targets.len(),
            "registered proxy installer"
        );
        Ok(RegistrationOutcome::Registered(registration))
    }

    /// Computes the target set for an enabled declaration.
    ///
    /// Explicit targets win outright and the scanner is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyRegistrarError::NotAnInterface`] or
    /// [`ProxyRegistrarError::Scan`] from the scan path.
    pub fn resolve_targets(
        &self,
        declaration: &ProxyDeclaration,
        entry_point: &TypeRef,
    ) -> ProxyRegistrarResult<TargetSet> {
        if !declaration.explicit_targets().is_empty() {
            return Ok(declaration.explicit_targets().iter().cloned().collect());
        }

        let namespaces = NamespaceSet::resolve(
            declaration.namespaces(),
            declaration.representative_types(),
            entry_point,
        );
        debug!(namespaces = ?display_namespaces(&namespaces), "resolved scan namespaces");
        self.scan_targets(&namespaces)
    }

    /// Scans every namespace for marker-carrying interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyRegistrarError::NotAnInterface`] as soon as a match is
    /// not an interface, or [`ProxyRegistrarError::Scan`] when the scanner
    /// fails.
    pub fn scan_targets(&self, namespaces: &NamespaceSet) -> ProxyRegistrarResult<TargetSet> {
        let filter = CandidateFilter::for_marker(self.config.marker.as_str());
        let mut targets = TargetSet::new();

        for namespace in namespaces {
            for candidate in self.scanner.find_candidates(namespace, &filter)? {
                if !candidate.is_interface() {
                    return Err(ProxyRegistrarError::NotAnInterface {
                        type_ref: candidate.qualified_name().clone(),
                        marker: self.config.marker.clone(),
                    });
                }
                targets.insert(candidate.qualified_name().clone());
            }
        }

        debug!(
            candidates = ?targets.iter().map(TypeRef::as_str).collect::<Vec<_>>(),
            "found proxy targets"
        );
        Ok(targets)
    }
}

fn display_namespaces(namespaces: &NamespaceSet) -> Vec<&str> {
    namespaces.iter().map(Namespace::as_str).collect()
}
