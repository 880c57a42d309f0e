//! Introspection port for the application entry point.

use crate::interception::domain::{AnnotationAttributes, TypeRef};

/// Read-only view of the application entry point's type metadata.
pub trait EntryPointMetadata: Send + Sync {
    /// Returns the entry point's fully-qualified type name.
    fn type_name(&self) -> &TypeRef;

    /// Returns the attributes of `annotation` on the entry point.
    ///
    /// Returns `None` when the entry point does not carry the annotation.
    /// When `include_defaults` is `true`, attributes that were not written
    /// explicitly are filled with their declared defaults.
    fn annotation_attributes(
        &self,
        annotation: &str,
        include_defaults: bool,
    ) -> Option<AnnotationAttributes>;
}
