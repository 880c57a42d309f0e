//! Registrar configuration.
//!
//! [`RegistrarConfig`] names the declaration annotation, the target marker
//! and the installer record identity. [`ConfigLoader`] layers defaults, an
//! optional TOML file and `AUTOPROXY_`-prefixed environment variables.

mod loader;

pub use loader::{CONFIG_ENV_PREFIX, ConfigError, ConfigLoader, ConfigResult};

use crate::interception::domain::{DEFAULT_INSTALLER_TYPE, DEFAULT_REGISTRATION_NAME};
use serde::{Deserialize, Serialize};

/// Annotation on the entry point that enables proxy registration.
pub const DEFAULT_DECLARATION_ANNOTATION: &str = "EnableAutoProxy";

/// Marker annotation identifying an interface as a proxy target.
pub const DEFAULT_TARGET_MARKER: &str = "ProxyTarget";

/// Names used by the registrar during a registration pass.
///
/// # Examples
///
/// ```
/// use autoproxy::config::RegistrarConfig;
///
/// let config = RegistrarConfig::default().with_marker("FeignClient");
/// assert_eq!(config.marker, "FeignClient");
/// assert_eq!(config.registration_name, "proxyInstaller");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Declaration annotation looked up on the entry point.
    pub annotation: String,
    /// Marker annotation a scanned interface must carry.
    pub marker: String,
    /// Registry name of the installer record.
    pub registration_name: String,
    /// Installer type stored in the record.
    pub installer_type: String,
}

impl RegistrarConfig {
    /// Replaces the declaration annotation name.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    /// Replaces the target marker name.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Replaces the installer registration name.
    #[must_use]
    pub fn with_registration_name(mut self, name: impl Into<String>) -> Self {
        self.registration_name = name.into();
        self
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            annotation: DEFAULT_DECLARATION_ANNOTATION.to_owned(),
            marker: DEFAULT_TARGET_MARKER.to_owned(),
            registration_name: DEFAULT_REGISTRATION_NAME.to_owned(),
            installer_type: DEFAULT_INSTALLER_TYPE.to_owned(),
        }
    }
}
