//! Sub-configuration structs with defaults matching the CLI defaults.

use serde::{Deserialize, Serialize};

/// Grid rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixel grid side length (the grid is always square)
    pub grid_size: u32,

    /// Default hash algorithm name (parsed into the registry at use time)
    pub algorithm: String,

    /// Output image width in pixels
    pub image_width: u32,

    /// Output image height in pixels
    pub image_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            algorithm: "sha512".to_string(),
            image_width: 1024,
            image_height: 1024,
        }
    }
}

/// Video output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Number of frames per generated video
    pub frames: u32,

    /// Output frame rate
    pub fps: u32,

    /// Output video width in pixels
    pub width: u32,

    /// Output video height in pixels
    pub height: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            fps: 30,
            width: 640,
            height: 480,
        }
    }
}

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of parallel frame workers in video mode
    pub parallel_workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { parallel_workers: 4 }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for derived output filenames (supports ~ expansion)
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
