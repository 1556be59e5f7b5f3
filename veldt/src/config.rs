//! Configuration module for the veldt CLI.
//!
//! This module handles loading and managing configuration settings for the
//! veldt application. Settings come from a TOML file discovered in the
//! user's config directory (or passed explicitly with `--config`); every
//! field has a serde default so a partial file is fine.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, VeldtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "veldt.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the veldt CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format for token dumps ("text" or "json").
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether diagnostics use color by default.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            format: default_format(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Looks for `veldt.toml` in the platform config directory, then in the
    /// home directory as `.veldt.toml`. Falls back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        for candidate in Self::default_paths() {
            if candidate.is_file() {
                return Self::load_from_path(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VeldtError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| VeldtError::Config(format!("Cannot parse {}: {}", path.display(), e)))
    }

    /// The candidate paths searched by [`Config::load`], in order.
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = config_dir() {
            paths.push(dir.join("veldt").join(CONFIG_FILE_NAME));
        }
        if let Some(dir) = home_dir() {
            paths.push(dir.join(format!(".{CONFIG_FILE_NAME}")));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.format, "text");
        assert!(config.color);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verbose = true\nformat = \"json\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert!(config.verbose);
        assert_eq!(config.format, "json");
        // Unset fields take their serde defaults.
        assert!(config.color);
    }

    #[test]
    fn test_load_from_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = Config::load_from_path(Path::new("/nonexistent/veldt.toml")).unwrap_err();
        assert!(matches!(err, VeldtError::Config(_)));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verbose = \"not a bool\"").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, VeldtError::Config(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config {
            verbose: true,
            format: "json".to_string(),
            color: false,
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }
}
