//! Entry-point declaration enabling proxy registration.

use super::{InterceptionDomainError, Namespace, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw attribute values read from the entry point's declaration annotation.
///
/// Every field is optional because introspection collaborators may omit
/// attributes that were never written. [`ProxyDeclaration::from_attributes`]
/// normalizes absent values to their defaults, so absent and empty lists are
/// indistinguishable past this boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationAttributes {
    /// Alias for `base_packages`.
    pub value: Option<Vec<String>>,
    /// Namespaces to scan.
    pub base_packages: Option<Vec<String>>,
    /// Types whose containing namespace is scanned.
    pub base_package_classes: Option<Vec<String>>,
    /// Explicit proxy targets; when non-empty, scanning is skipped.
    pub clients: Option<Vec<String>>,
    /// Whether proxy registration is enabled.
    pub enable: Option<bool>,
}

impl AnnotationAttributes {
    /// Fills every absent attribute with its declared default.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        Self {
            value: Some(self.value.unwrap_or_default()),
            base_packages: Some(self.base_packages.unwrap_or_default()),
            base_package_classes: Some(self.base_package_classes.unwrap_or_default()),
            clients: Some(self.clients.unwrap_or_default()),
            enable: Some(self.enable.unwrap_or(true)),
        }
    }
}

/// Typed declaration read from the application entry point.
///
/// Precedence is fixed: a disabled declaration does nothing, explicit targets
/// bypass scanning, and otherwise `namespaces` plus the namespaces of
/// `representative_types` are scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDeclaration {
    enabled: bool,
    explicit_targets: BTreeSet<TypeRef>,
    namespaces: BTreeSet<Namespace>,
    representative_types: BTreeSet<TypeRef>,
}

impl ProxyDeclaration {
    /// Creates an enabled declaration with no targets or namespaces.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: true,
            explicit_targets: BTreeSet::new(),
            namespaces: BTreeSet::new(),
            representative_types: BTreeSet::new(),
        }
    }

    /// Creates a disabled declaration.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            explicit_targets: BTreeSet::new(),
            namespaces: BTreeSet::new(),
            representative_types: BTreeSet::new(),
        }
    }

    /// Builds a declaration from raw annotation attributes.
    ///
    /// Attributes are read in precedence order. A disabled declaration is
    /// returned without inspecting any list, and non-empty `clients` make
    /// the scan attributes irrelevant, so those are not parsed either.
    /// Otherwise `value` and `base_packages` both feed the namespace list;
    /// blank namespace entries are kept as the root namespace and ignored
    /// later during resolution.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptionDomainError`] when a client, or on the scan
    /// path a representative type or namespace, is malformed.
    pub fn from_attributes(attributes: AnnotationAttributes) -> Result<Self, InterceptionDomainError> {
        let AnnotationAttributes {
            value,
            base_packages,
            base_package_classes,
            clients,
            enable,
        } = attributes;

        if !enable.unwrap_or(true) {
            return Ok(Self::disabled());
        }

        let explicit_targets = parse_type_refs(clients)?;
        if !explicit_targets.is_empty() {
            return Ok(Self::new().with_explicit_targets(explicit_targets));
        }

        let namespaces = value
            .unwrap_or_default()
            .into_iter()
            .chain(base_packages.unwrap_or_default())
            .map(Namespace::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let representative_types = parse_type_refs(base_package_classes)?;

        Ok(Self {
            enabled: true,
            explicit_targets,
            namespaces,
            representative_types,
        })
    }

    /// Replaces the explicit target list.
    #[must_use]
    pub fn with_explicit_targets(mut self, targets: impl IntoIterator<Item = TypeRef>) -> Self {
        self.explicit_targets = targets.into_iter().collect();
        self
    }

    /// Replaces the namespace list.
    #[must_use]
    pub fn with_namespaces(mut self, namespaces: impl IntoIterator<Item = Namespace>) -> Self {
        self.namespaces = namespaces.into_iter().collect();
        self
    }

    /// Replaces the representative type list.
    #[must_use]
    pub fn with_representative_types(mut self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.representative_types = types.into_iter().collect();
        self
    }

    /// Returns whether registration is enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the explicit proxy targets.
    #[must_use]
    pub const fn explicit_targets(&self) -> &BTreeSet<TypeRef> {
        &self.explicit_targets
    }

    /// Returns the namespaces named explicitly.
    #[must_use]
    pub const fn namespaces(&self) -> &BTreeSet<Namespace> {
        &self.namespaces
    }

    /// Returns the representative types.
    #[must_use]
    pub const fn representative_types(&self) -> &BTreeSet<TypeRef> {
        &self.representative_types
    }
}

impl Default for ProxyDeclaration {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_type_refs(
    names: Option<Vec<String>>,
) -> Result<BTreeSet<TypeRef>, InterceptionDomainError> {
    names
        .unwrap_or_default()
        .into_iter()
        .map(TypeRef::new)
        .collect()
}
