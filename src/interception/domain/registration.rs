//! Installer registration record and the outcome of a registration pass.

use super::{TargetSet, TypeRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known registry name under which the installer is registered.
pub const DEFAULT_REGISTRATION_NAME: &str = "proxyInstaller";

/// Type name of the installer component described by the record.
pub const DEFAULT_INSTALLER_TYPE: &str = "autoproxy::ProxyInstaller";

/// Reference to the installer component type held by a registration record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallerType(String);

impl InstallerType {
    /// Creates an installer type reference.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstallerType {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER_TYPE)
    }
}

impl fmt::Display for InstallerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry entry describing the proxy installer and its single constructor
/// argument.
///
/// Created once per bootstrap pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerRegistration {
    name: String,
    installer: InstallerType,
    constructor_args: Vec<TypeRef>,
}

impl InstallerRegistration {
    /// Creates a record copying `targets` into a sorted constructor argument.
    #[must_use]
    pub fn new(name: impl Into<String>, installer: InstallerType, targets: &TargetSet) -> Self {
        Self {
            name: name.into(),
            installer,
            constructor_args: targets.to_constructor_args(),
        }
    }

    /// Returns the registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the installer type.
    #[must_use]
    pub const fn installer(&self) -> &InstallerType {
        &self.installer
    }

    /// Returns the ordered constructor argument.
    #[must_use]
    pub fn constructor_args(&self) -> &[TypeRef] {
        &self.constructor_args
    }

    /// Rebuilds the target set from the constructor argument.
    #[must_use]
    pub fn target_set(&self) -> TargetSet {
        self.constructor_args.iter().cloned().collect()
    }
}

/// Result of one registration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The entry point carries no declaration annotation.
    NotDeclared,
    /// The declaration disables registration.
    Disabled,
    /// Neither explicit targets nor scan matches were found.
    NoTargets,
    /// The installer record was inserted into the registry.
    Registered(InstallerRegistration),
}

impl RegistrationOutcome {
    /// Returns the inserted record, if any.
    #[must_use]
    pub const fn registration(&self) -> Option<&InstallerRegistration> {
        match self {
            Self::Registered(registration) => Some(registration),
            Self::NotDeclared | Self::Disabled | Self::NoTargets => None,
        }
    }
}
