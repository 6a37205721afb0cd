//! Configuration management for prompt2pixel.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; CLI flags override individual values at the command layer.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for prompt2pixel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid rendering settings
    pub render: RenderConfig,

    /// Video output settings
    pub video: VideoConfig,

    /// Processing settings
    pub processing: ProcessingConfig,

    /// Output location settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories (e.g.
    /// `~/.config/prompt2pixel/config.toml` on Linux), falling back to
    /// `~/.prompt2pixel/config.toml` if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "prompt2pixel", "prompt2pixel")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".prompt2pixel").join("config.toml")
            })
    }

    /// Resolved output directory (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output.directory);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.grid_size, 8);
        assert_eq!(config.render.algorithm, "sha512");
        assert_eq!(config.video.frames, 60);
        assert_eq!(config.video.fps, 30);
        assert_eq!(config.processing.parallel_workers, 4);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[render]"));
        assert!(toml.contains("[video]"));
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[video]\nfps = 12\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.video.fps, 12);
        assert_eq!(config.video.frames, 60);
        assert_eq!(config.render.grid_size, 8);
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid [ toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_output_dir_expands_tilde() {
        let mut config = Config::default();
        config.output.directory = "~/art".to_string();
        let dir = config.output_dir();
        assert!(!dir.to_string_lossy().starts_with('~'));
    }
}
