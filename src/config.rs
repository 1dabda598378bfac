//! Configuration.
//!
//! Loaded from `~/.startlist/config.toml`. A missing file means defaults;
//! an unreadable or invalid file is an error worth telling the user about.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::style;

/// Configuration for the `startlist` binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Style used when `--style` is not given.
    pub default_style: String,
    /// Directory holding `flags/` and `logos/`.
    pub assets_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: "national".to_string(),
            assets_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load config from `~/.startlist/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if style::by_name(&config.default_style).is_none() {
            return Err(format!(
                "unknown default-style {:?} in {}\n\
                 Run `startlist styles` for the available names.",
                config.default_style,
                path.display()
            ));
        }
        Ok(config)
    }

    /// The config file path: `~/.startlist/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".startlist").join("config.toml"))
    }
}
