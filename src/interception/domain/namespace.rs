//! Namespaces used as scan roots and the resolved set of them.

use super::{InterceptionDomainError, TypeRef, type_ref::is_qualified_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Hierarchical code-organization unit used as a scan root.
///
/// The root namespace is the empty string and contains every type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Creates a validated namespace.
    ///
    /// The input is trimmed. A blank input yields the root namespace.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptionDomainError::InvalidNamespace`] when a dotted
    /// segment is empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InterceptionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        if !is_qualified_name(trimmed) {
            return Err(InterceptionDomainError::InvalidNamespace(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the root namespace.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    pub(super) const fn from_validated(value: String) -> Self {
        Self(value)
    }

    /// Returns `true` for the root namespace.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when `type_ref` lives in this namespace or in one of its
    /// descendants.
    #[must_use]
    pub fn contains(&self, type_ref: &TypeRef) -> bool {
        if self.is_root() {
            return true;
        }
        let owner = type_ref.namespace();
        owner.as_str() == self.as_str()
            || owner
                .as_str()
                .strip_prefix(self.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl TryFrom<String> for Namespace {
    type Error = InterceptionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(value: Namespace) -> Self {
        value.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deduplicated, never-empty set of namespaces to scan.
///
/// Only [`NamespaceSet::resolve`] constructs a set, and it always falls back
/// to the entry point's own namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSet(BTreeSet<Namespace>);

impl NamespaceSet {
    /// Resolves the namespaces to scan.
    ///
    /// The result is the union of the explicit `namespaces` (root entries
    /// dropped, since a blank entry is not a namespace request) and the
    /// containing namespace of each representative type. When that union is
    /// empty the entry point's own namespace is used instead.
    #[must_use]
    pub fn resolve<'a>(
        namespaces: impl IntoIterator<Item = &'a Namespace>,
        representative_types: impl IntoIterator<Item = &'a TypeRef>,
        entry_point: &TypeRef,
    ) -> Self {
        let mut resolved: BTreeSet<Namespace> = namespaces
            .into_iter()
            .filter(|namespace| !namespace.is_root())
            .cloned()
            .collect();
        resolved.extend(representative_types.into_iter().map(TypeRef::namespace));

        if resolved.is_empty() {
            resolved.insert(entry_point.namespace());
        }

        Self(resolved)
    }

    /// Iterates namespaces in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.0.iter()
    }

    /// Returns the number of namespaces; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with other collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` when `namespace` is part of the set.
    #[must_use]
    pub fn contains(&self, namespace: &Namespace) -> bool {
        self.0.contains(namespace)
    }
}

impl<'a> IntoIterator for &'a NamespaceSet {
    type Item = &'a Namespace;
    type IntoIter = std::collections::btree_set::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
