//! Final set of proxy targets.

use super::TypeRef;
use std::collections::BTreeSet;

/// Types whose constructed instances are handed to the proxy installer.
///
/// Backed by an ordered set, so iteration and the constructor argument
/// array are sorted lexicographically by qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet(BTreeSet<TypeRef>);

impl TargetSet {
    /// Creates an empty target set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a target; returns `false` when it was already present.
    pub fn insert(&mut self, target: TypeRef) -> bool {
        self.0.insert(target)
    }

    /// Returns `true` when `target` is in the set.
    #[must_use]
    pub fn contains(&self, target: &TypeRef) -> bool {
        self.0.contains(target)
    }

    /// Returns the number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates targets in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRef> {
        self.0.iter()
    }

    /// Copies the targets into the ordered array stored as the installer's
    /// constructor argument.
    #[must_use]
    pub fn to_constructor_args(&self) -> Vec<TypeRef> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<TypeRef> for TargetSet {
    fn from_iter<I: IntoIterator<Item = TypeRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<TypeRef> for TargetSet {
    fn extend<I: IntoIterator<Item = TypeRef>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
