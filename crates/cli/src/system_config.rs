//! User-level configuration for mvc
//!
//! Stored at `~/.config/mvc/config.toml` (or the platform equivalent).
//! Holds preferences that apply across repositories — today that is the
//! default repository folder used when `--repo` and `MVC_REPO` are
//! absent.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-level mvc configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Default repository folder
    pub repo_root: Option<PathBuf>,
}

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("mvc"))
}

/// Get the config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load the configuration, defaulting when the file doesn't exist.
pub fn load() -> Result<SystemConfig> {
    let config_path = match config_file_path() {
        Some(p) => p,
        None => {
            tracing::debug!("could not determine config directory, using defaults");
            return Ok(SystemConfig::default());
        }
    };

    if !config_path.exists() {
        tracing::debug!("config not found at {}, using defaults", config_path.display());
        return Ok(SystemConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config at {}", config_path.display()))?;

    let config: SystemConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config at {}", config_path.display()))?;

    Ok(config)
}

/// Save the configuration, creating the config directory if needed.
pub fn save(config: &SystemConfig) -> Result<()> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("failed to create config directory {}", config_dir.display()))?;

    let config_path = config_dir.join("config.toml");
    let content = toml::to_string_pretty(config).context("failed to serialize config")?;

    fs::write(&config_path, &content)
        .with_context(|| format!("failed to write config to {}", config_path.display()))?;

    tracing::debug!("saved config to {}", config_path.display());
    Ok(())
}
