//! Entry-point metadata backed by a fixed annotation table.

use std::collections::HashMap;

use crate::interception::{
    domain::{AnnotationAttributes, TypeRef},
    ports::EntryPointMetadata,
};

/// Entry point whose annotations are supplied up front.
#[derive(Debug, Clone)]
pub struct StaticEntryPoint {
    type_name: TypeRef,
    annotations: HashMap<String, AnnotationAttributes>,
}

impl StaticEntryPoint {
    /// Creates an entry point carrying no annotations.
    #[must_use]
    pub fn new(type_name: TypeRef) -> Self {
        Self {
            type_name,
            annotations: HashMap::new(),
        }
    }

    /// Attaches `annotation` with the given attributes, replacing any
    /// previous value.
    #[must_use]
    pub fn with_annotation(
        mut self,
        annotation: impl Into<String>,
        attributes: AnnotationAttributes,
    ) -> Self {
        self.annotations.insert(annotation.into(), attributes);
        self
    }
}

impl EntryPointMetadata for StaticEntryPoint {
    fn type_name(&self) -> &TypeRef {
        &self.type_name
    }

    fn annotation_attributes(
        &self,
        annotation: &str,
        include_defaults: bool,
    ) -> Option<AnnotationAttributes> {
        let attributes = self.annotations.get(annotation).cloned()?;
        if include_defaults {
            Some(attributes.with_defaults())
        } else {
            Some(attributes)
        }
    }
}
