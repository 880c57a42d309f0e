//! Scan candidates and the filter applied to them.

use super::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of type definition surfaced by a namespace scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// An interface (trait-like contract).
    Interface,
    /// A concrete or abstract class.
    Class,
    /// An annotation type definition.
    Annotation,
}

/// Metadata describing one type found by a namespace scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDescriptor {
    qualified_name: TypeRef,
    kind: TypeKind,
    independent: bool,
    markers: BTreeSet<String>,
}

impl CandidateDescriptor {
    /// Creates an independent, unmarked descriptor.
    #[must_use]
    pub const fn new(qualified_name: TypeRef, kind: TypeKind) -> Self {
        Self {
            qualified_name,
            kind,
            independent: true,
            markers: BTreeSet::new(),
        }
    }

    /// Shorthand for an independent interface carrying `marker`.
    #[must_use]
    pub fn marked_interface(qualified_name: TypeRef, marker: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeKind::Interface).with_marker(marker)
    }

    /// Adds a marker annotation.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.insert(marker.into());
        self
    }

    /// Marks the descriptor as dependent (inner or anonymous).
    #[must_use]
    pub const fn dependent(mut self) -> Self {
        self.independent = false;
        self
    }

    /// Returns the qualified type name.
    #[must_use]
    pub const fn qualified_name(&self) -> &TypeRef {
        &self.qualified_name
    }

    /// Returns the type kind.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns `true` for interface types.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Returns `true` for annotation type definitions.
    #[must_use]
    pub fn is_annotation_type(&self) -> bool {
        self.kind == TypeKind::Annotation
    }

    /// Returns `true` when the type can be constructed independently of an
    /// enclosing instance.
    #[must_use]
    pub const fn is_independent(&self) -> bool {
        self.independent
    }

    /// Returns `true` when the type carries `marker`.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }
}

/// Predicate deciding whether a scanned definition is a candidate at all.
pub type CandidatePredicate = fn(&CandidateDescriptor) -> bool;

/// Default predicate: independent, non-annotation type definitions.
#[must_use]
pub fn is_independent_non_annotation(candidate: &CandidateDescriptor) -> bool {
    candidate.is_independent() && !candidate.is_annotation_type()
}

/// Filter handed to a candidate scanner.
///
/// A definition matches when it carries the marker and the predicate holds.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    marker: String,
    predicate: CandidatePredicate,
}

impl CandidateFilter {
    /// Creates a filter for `marker` using [`is_independent_non_annotation`].
    #[must_use]
    pub fn for_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            predicate: is_independent_non_annotation,
        }
    }

    /// Replaces the candidate predicate.
    #[must_use]
    pub const fn with_predicate(mut self, predicate: CandidatePredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Returns the marker name.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns `true` when `candidate` passes the filter.
    #[must_use]
    pub fn matches(&self, candidate: &CandidateDescriptor) -> bool {
        candidate.has_marker(&self.marker) && (self.predicate)(candidate)
    }
}
