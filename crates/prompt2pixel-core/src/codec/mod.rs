//! The hash-to-pixel codec pipeline.
//!
//! This module contains the stages of the codec:
//! - **digest**: hash `text + salt` with a registry algorithm
//! - **channels**: decode the hex digest into 8-bit channel values
//! - **grid**: map the channel sequence onto a square pixel grid
//! - **color**: palette quantization and RGB→CMYK conversion
//! - **palette**: load reference colors, answer nearest-color queries
//! - **generator**: orchestrate one full text→grid run
//! - **sequencer**: per-frame re-salted generation for video

pub mod channels;
pub mod color;
pub mod digest;
pub mod generator;
pub mod grid;
pub mod palette;
pub mod sequencer;

// Re-exports for convenient access
pub use color::{rgb_to_cmyk, Cmyk, ColorTransformer};
pub use digest::{digest_hex, HashAlgorithm};
pub use generator::GridGenerator;
pub use grid::{map_channels, ColorMode, Pixel, PixelGrid};
pub use palette::{Palette, Rgb};
pub use sequencer::{CollectSink, FrameSequencer, FrameSink};
