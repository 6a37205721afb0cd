//! prompt2pixel Core - deterministic hash-to-pixel art generation.
//!
//! prompt2pixel derives a visual artifact (a still image or an MP4 video)
//! from an arbitrary text string by hashing `text + salt` and
//! reinterpreting the digest bytes as pixel color data.
//!
//! # Pipeline
//!
//! ```text
//! text, salt, algorithm → digest → hex → channels → grid (+ palette, + CMYK) → sink
//! ```
//!
//! The same `(text, salt, algorithm, size, options)` tuple always produces
//! the same grid, bit for bit. Video mode re-runs the pipeline once per
//! frame with the frame index as the salt.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use prompt2pixel_core::{ColorMode, GridGenerator, HashAlgorithm, Palette};
//!
//! let generator = GridGenerator::new(
//!     HashAlgorithm::Sha512,
//!     8,
//!     ColorMode::Rgb,
//!     Arc::new(Palette::empty()),
//! );
//! let grid = generator.generate("hello world", "").unwrap();
//! assert_eq!(grid.size(), 8);
//! ```

// Module declarations
pub mod codec;
pub mod config;
pub mod encode;
pub mod error;
pub mod render;

// Re-exports for convenient access
pub use codec::{
    digest_hex, map_channels, rgb_to_cmyk, Cmyk, CollectSink, ColorMode, ColorTransformer,
    FrameSequencer, FrameSink, GridGenerator, HashAlgorithm, Palette, Pixel, PixelGrid, Rgb,
};
pub use config::Config;
pub use encode::{ffmpeg_available, EncodeSettings, FfmpegEncoder};
pub use error::{CodecError, CodecResult, ConfigError, PaletteError, Prompt2PixelError, Result};
pub use render::{grid_to_rgb_image, ImageRenderer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
