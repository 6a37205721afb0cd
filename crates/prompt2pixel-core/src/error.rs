//! Error types for the prompt2pixel codec pipeline.
//!
//! Errors are layered by concern: codec errors cover the pure hash-to-pixel
//! transforms, palette errors cover reference-color loading, and config
//! errors cover the TOML configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for prompt2pixel operations.
#[derive(Error, Debug)]
pub enum Prompt2PixelError {
    /// Codec pipeline errors (digest, decode, grid mapping)
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Palette loading/parsing errors
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image encoding errors from the image sink
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Video sink failures (ffmpeg spawn, pipe, exit status)
    #[error("Encode error: {0}")]
    Encode(String),

    /// A frame worker task failed to run to completion
    #[error("Frame worker failed: {0}")]
    Worker(String),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the pure codec transforms.
///
/// These are deterministic: retrying the same input cannot change the
/// outcome, so none of them is ever retried.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Requested hash algorithm is not in the closed registry
    #[error("Unsupported hash algorithm '{name}'. Supported: {supported}")]
    UnsupportedAlgorithm { name: String, supported: String },

    /// A hex-digit pair in the digest could not be parsed
    #[error("Invalid digest: non-hex pair '{pair}' at offset {position}")]
    InvalidDigest { position: usize, pair: String },

    /// Channel sequence too short (or grid empty) for pixel mapping
    #[error("Insufficient channels: {available} available, at least {needed} required")]
    InsufficientChannels { available: usize, needed: usize },

    /// Cooperative cancellation between frames — not a failure
    #[error("Generation cancelled")]
    Cancelled,
}

/// Palette file errors. No partial palette is ever produced.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Failed to read the palette file from disk
    #[error("Failed to read palette file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data line did not contain three valid color components
    #[error("Malformed palette line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for prompt2pixel results.
pub type Result<T> = std::result::Result<T, Prompt2PixelError>;

/// Convenience type alias for codec-stage results.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
