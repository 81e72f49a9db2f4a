//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/bitemark/config.toml)
//! 3. Environment variables (BITEMARK_* prefix)
//!
//! Environment variables take precedence over config file values.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::images::ImageQuality;

/// Environment variable prefix
const ENV_PREFIX: &str = "BITEMARK";

/// Default static image host
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:3000/images";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the static image host
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Quality of poster images
    #[serde(default)]
    pub image_quality: ImageQuality,

    /// Catalog JSON file used when none is given on the command line
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Log filter level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            image_quality: ImageQuality::default(),
            catalog_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (BITEMARK_IMAGE_BASE_URL, BITEMARK_IMAGE_QUALITY,
    ///    BITEMARK_CATALOG, BITEMARK_LOG_LEVEL)
    /// 2. Config file (~/.config/bitemark/config.toml or BITEMARK_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(config_path: Option<&PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // BITEMARK_IMAGE_BASE_URL
        if let Ok(val) = std::env::var(format!("{}_IMAGE_BASE_URL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.image_base_url = val;
            }
        }

        // BITEMARK_IMAGE_QUALITY
        if let Ok(val) = std::env::var(format!("{}_IMAGE_QUALITY", ENV_PREFIX)) {
            self.image_quality = val
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {}_IMAGE_QUALITY", ENV_PREFIX))?;
        }

        // BITEMARK_CATALOG
        if let Ok(val) = std::env::var(format!("{}_CATALOG", ENV_PREFIX)) {
            self.catalog_path = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        // BITEMARK_LOG_LEVEL
        if let Ok(val) = std::env::var(format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.log_level = val;
            }
        }

        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with BITEMARK_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bitemark")
            .join("config.toml")
    }
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}
