//! Installer that wraps target instances as the host constructs them.

use std::sync::Arc;

use tracing::trace;

use crate::interception::{
    domain::{InstallerRegistration, TargetSet, TypeRef},
    ports::{Component, ConstructionHook, ProxyFactory},
};

/// Construction hook built from an installer registration record.
///
/// Instances of target types are replaced by the factory's proxy; every
/// other instance passes through untouched.
#[derive(Clone)]
pub struct ProxyInstaller<F>
where
    F: ProxyFactory,
{
    targets: TargetSet,
    factory: Arc<F>,
}

impl<F> ProxyInstaller<F>
where
    F: ProxyFactory,
{
    /// Creates an installer for `targets`.
    #[must_use]
    pub const fn new(targets: TargetSet, factory: Arc<F>) -> Self {
        Self { targets, factory }
    }

    /// Creates an installer from the constructor argument of `registration`.
    #[must_use]
    pub fn from_registration(registration: &InstallerRegistration, factory: Arc<F>) -> Self {
        Self::new(registration.target_set(), factory)
    }

    /// Returns the target set.
    #[must_use]
    pub const fn targets(&self) -> &TargetSet {
        &self.targets
    }
}

impl<F> ConstructionHook for ProxyInstaller<F>
where
    F: ProxyFactory,
{
    fn after_construction(&self, instance: Component, type_ref: &TypeRef) -> Component {
        if !self.targets.contains(type_ref) {
            return instance;
        }
        trace!(target_type = %type_ref, "wrapping constructed instance");
        self.factory.wrap(instance, type_ref)
    }
}
