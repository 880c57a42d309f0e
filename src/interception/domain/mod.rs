//! Domain model for proxy target discovery and installer registration.
//!
//! The interception domain models the entry-point declaration, type and
//! namespace references, scan candidates, and the installer registration
//! record. Scanning, registries and proxy construction stay outside the
//! domain boundary.

mod candidate;
mod declaration;
mod error;
mod namespace;
mod registration;
mod target;
mod type_ref;

pub use candidate::{
    CandidateDescriptor, CandidateFilter, CandidatePredicate, TypeKind,
    is_independent_non_annotation,
};
pub use declaration::{AnnotationAttributes, ProxyDeclaration};
pub use error::InterceptionDomainError;
pub use namespace::{Namespace, NamespaceSet};
pub use registration::{
    DEFAULT_INSTALLER_TYPE, DEFAULT_REGISTRATION_NAME, InstallerRegistration, InstallerType,
    RegistrationOutcome,
};
pub use target::TargetSet;
pub use type_ref::TypeRef;
