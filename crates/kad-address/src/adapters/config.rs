//! Configuration providers
//!
//! `TomlConfigProvider` needs the `config` feature. The crate's
//! dev-dependencies enable it, so a plain `cargo test` covers it.

use crate::domain::AddressSpaceConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For files, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: AddressSpaceConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified config.
    #[must_use]
    pub fn with_config(mut self, config: AddressSpaceConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_address_config(&self) -> AddressSpaceConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - File config loading (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use crate::error::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use tracing::info;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        address_space: AddressSpaceConfig,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [address_space]
    /// max_prox = 8
    /// prox_bin_size = 2
    /// ```
    ///
    /// Missing keys fall back to `AddressSpaceConfig::default()`.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: AddressSpaceConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or fails validation.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            let provider = Self::parse(&content)?;
            info!(
                path = %path.as_ref().display(),
                max_prox = provider.config.max_prox,
                "loaded address space config"
            );
            Ok(provider)
        }

        /// Parse configuration from a TOML string.
        ///
        /// # Errors
        ///
        /// `ConfigError::Parse` on malformed TOML, `ConfigError::Invalid` if validation fails.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
            file.address_space.validate()?;

            Ok(Self {
                config: file.address_space,
            })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_address_config(&self) -> AddressSpaceConfig {
            self.config.clone()
        }
    }

}

#[cfg(feature = "config")]
pub use toml_config::TomlConfigProvider;
