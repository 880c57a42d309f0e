//! Decorate-on-construction ports.
//!
//! The host's object-construction pipeline calls a [`ConstructionHook`] for
//! every newly built instance. The installer implements the hook and
//! delegates the actual wrapping to a [`ProxyFactory`].

use crate::interception::domain::TypeRef;
use std::any::Any;
use std::sync::Arc;

/// Type-erased component instance built by the host.
pub type Component = Arc<dyn Any + Send + Sync>;

/// Builds the proxy that stands in for a target instance.
pub trait ProxyFactory: Send + Sync {
    /// Wraps `instance`, which implements the target type `type_ref`.
    fn wrap(&self, instance: Component, type_ref: &TypeRef) -> Component;
}

/// Hook invoked by the host after constructing each component.
pub trait ConstructionHook: Send + Sync {
    /// Returns the instance to expose in place of `instance`.
    fn after_construction(&self, instance: Component, type_ref: &TypeRef) -> Component;
}
