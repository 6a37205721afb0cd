//! Configuration validation with range checks.

use std::str::FromStr;

use crate::codec::HashAlgorithm;
use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.render.grid_size == 0 {
            return Err(ConfigError::ValidationError(
                "render.grid_size must be > 0".into(),
            ));
        }
        if self.render.image_width == 0 || self.render.image_height == 0 {
            return Err(ConfigError::ValidationError(
                "render.image_width/image_height must be > 0".into(),
            ));
        }
        if HashAlgorithm::from_str(&self.render.algorithm).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "render.algorithm '{}' is not supported (one of: {})",
                self.render.algorithm,
                HashAlgorithm::supported_names()
            )));
        }
        if self.video.frames == 0 {
            return Err(ConfigError::ValidationError(
                "video.frames must be > 0".into(),
            ));
        }
        if self.video.fps == 0 {
            return Err(ConfigError::ValidationError("video.fps must be > 0".into()));
        }
        if self.video.width == 0 || self.video.height == 0 {
            return Err(ConfigError::ValidationError(
                "video.width/height must be > 0".into(),
            ));
        }
        if self.processing.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.parallel_workers must be > 0".into(),
            ));
        }
        Ok(())
    }
}
