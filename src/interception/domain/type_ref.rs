//! Fully-qualified type reference.

use super::{InterceptionDomainError, Namespace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying a type by its fully-qualified name.
///
/// Equality, hashing and ordering are by qualified name, so a type discovered
/// through two different namespaces collapses to a single entry in any set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef(String);

impl TypeRef {
    /// Creates a validated type reference.
    ///
    /// The input is trimmed. Dotted segments must be non-empty and the name
    /// must not contain whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptionDomainError::EmptyTypeName`] when the value is
    /// empty after trimming, or [`InterceptionDomainError::InvalidTypeName`]
    /// when it is not a well-formed qualified name.
    pub fn new(value: impl Into<String>) -> Result<Self, InterceptionDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InterceptionDomainError::EmptyTypeName);
        }

        if !is_qualified_name(trimmed) {
            return Err(InterceptionDomainError::InvalidTypeName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the qualified name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the unqualified type name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, name)| name)
    }

    /// Returns the namespace containing this type.
    ///
    /// A type without a dotted prefix lives in the root namespace.
    #[must_use]
    pub fn namespace(&self) -> Namespace {
        self.0
            .rsplit_once('.')
            .map_or_else(Namespace::root, |(prefix, _)| {
                Namespace::from_validated(prefix.to_owned())
            })
    }
}

/// Returns `true` when every dotted segment is non-empty and free of
/// whitespace.
pub(super) fn is_qualified_name(value: &str) -> bool {
    value
        .split('.')
        .all(|segment| !segment.is_empty() && !segment.chars().any(char::is_whitespace))
}

impl TryFrom<String> for TypeRef {
    type Error = InterceptionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.0
    }
}

impl AsRef<str> for TypeRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
