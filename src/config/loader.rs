//! Layered configuration loading.

use super::RegistrarConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Prefix for environment overrides, e.g. `AUTOPROXY_MARKER`.
pub const CONFIG_ENV_PREFIX: &str = "AUTOPROXY_";

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned while loading registrar configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A required field is blank.
    #[error("configuration field '{0}' must not be blank")]
    BlankField(&'static str),
}

/// Loads [`RegistrarConfig`] from defaults, a TOML file and the environment.
///
/// Later sources override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader reading defaults and the environment only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file source. A missing file is skipped.
    #[must_use]
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] when a source is malformed and
    /// [`ConfigError::BlankField`] when a field is blank after merging.
    pub fn load(&self) -> ConfigResult<RegistrarConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(RegistrarConfig::default()));

        if let Some(path) = &self.config_path {
            debug!(path = %path.display(), exists = path.exists(), "merging configuration file");
            figment = figment.merge(Toml::file(path));
        }

        let config: RegistrarConfig = figment
            .merge(Env::prefixed(CONFIG_ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;

        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &RegistrarConfig) -> ConfigResult<()> {
    let fields = [
        ("annotation", &config.annotation),
        ("marker", &config.marker),
        ("registration_name", &config.registration_name),
        ("installer_type", &config.installer_type),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::BlankField(field));
        }
    }
    Ok(())
}
