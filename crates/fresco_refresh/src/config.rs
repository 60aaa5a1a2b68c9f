//! Configuration structures for refresh coordination.
//!
//! This module provides TOML-based configuration. The configuration
//! system supports:
//! - Bundled defaults (include_str! from fresco.toml)
//! - User overrides (./fresco.toml or ~/.config/fresco/fresco.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use fresco_error::{ConfigError, FrescoError, FrescoResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Behavior knobs for the refresh coordinator.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct RefreshConfig {
    /// Whether one response may resolve other pending requests from the
    /// same origin whose files it covers
    #[serde(default = "default_cross_key_fanout")]
    cross_key_fanout: bool,

    /// Whether reference bytes may appear in log fields
    ///
    /// References authorize downloads, so they stay out of logs unless
    /// explicitly enabled for debugging.
    #[serde(default = "default_log_references")]
    log_references: bool,
}

fn default_cross_key_fanout() -> bool {
    true
}

fn default_log_references() -> bool {
    false
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            cross_key_fanout: default_cross_key_fanout(),
            log_references: default_log_references(),
        }
    }
}

/// Top-level fresco configuration.
///
/// Loads refresh settings from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from fresco.toml)
/// 2. User override (./fresco.toml or ~/.config/fresco/fresco.toml)
///
/// # Example
///
/// ```no_run
/// use fresco_refresh::FrescoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = FrescoConfig::load()?;
/// println!("fan-out enabled: {}", config.refresh.cross_key_fanout());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct FrescoConfig {
    /// Refresh coordinator settings
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl FrescoConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FrescoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (fresco.toml shipped with library)
    /// 2. User config in home directory (~/.config/fresco/fresco.toml)
    /// 3. User config in current directory (./fresco.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fresco_refresh::FrescoConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = FrescoConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> FrescoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../fresco.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fresco/fresco.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("fresco").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RefreshConfig::default();
        assert!(*config.cross_key_fanout());
        assert!(!*config.log_references());
    }

    #[test]
    fn test_builder() {
        let config = RefreshConfigBuilder::default()
            .cross_key_fanout(false)
            .log_references(true)
            .build()
            .unwrap();
        assert!(!*config.cross_key_fanout());
        assert!(*config.log_references());
    }

    #[test]
    fn test_setters() {
        let config = RefreshConfig::default().with_cross_key_fanout(false);
        assert!(!*config.cross_key_fanout());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RefreshConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RefreshConfig::default());
    }
}
