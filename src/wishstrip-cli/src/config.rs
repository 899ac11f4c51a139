//! Configuration management for wishstrip CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest used when neither a flag nor the config names one
pub const DEFAULT_MANIFEST: &str = "manifest.json";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub manifest: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("wishstrip");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get manifest path from config or None if not set
    pub fn get_manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    /// Set manifest path in config
    pub fn set_manifest(&mut self, manifest: PathBuf) {
        self.manifest = Some(manifest);
    }

    /// Pick the manifest to use: explicit path, then config, then `manifest.json`
    pub fn resolve_manifest(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .or(self.get_manifest())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }
}
