//! Configuration file (sdobjects.toml)
//!
//! ```toml
//! print = false
//!
//! [output]
//! directory = "things"
//! unknown_types = "skip"   # or "reject" (default)
//! ```
//!
//! Command-line flags take precedence over every setting here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snes_objects::UnknownTypePolicy;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "sdobjects.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Print JSON listings
    #[serde(default)]
    pub print: bool,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// THINGS output directory; output is disabled when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub unknown_types: UnknownTypePolicy,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse sdobjects configuration")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

/// Per-user configuration directory
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "Team Eternity", "sdobjects")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load configuration
///
/// An explicit path must exist. Otherwise `./sdobjects.toml` and then the user
/// config directory are tried, falling back to defaults when neither exists.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }

    let candidates = std::iter::once(PathBuf::from(CONFIG_FILE_NAME))
        .chain(config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)));

    for path in candidates {
        if path.is_file() {
            tracing::debug!("Loading config from {}", path.display());
            return Config::from_file(&path);
        }
    }

    Ok(Config::default())
}
