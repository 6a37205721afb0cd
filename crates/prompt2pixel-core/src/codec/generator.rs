//! Grid generation - wires digest, decode, and mapping into one pipeline.

use std::sync::Arc;

use super::channels;
use super::color::ColorTransformer;
use super::digest::{digest_hex, HashAlgorithm};
use super::grid::{map_channels, ColorMode, PixelGrid};
use super::palette::Palette;
use crate::error::CodecResult;

/// Generates one pixel grid from a `(text, salt)` pair.
///
/// Holds only configuration (algorithm, size, mode, shared palette); the
/// generation itself is a pure, synchronous transform, so one generator can
/// serve any number of concurrent frame workers.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    algorithm: HashAlgorithm,
    size: u32,
    mode: ColorMode,
    transformer: ColorTransformer,
}

impl GridGenerator {
    pub fn new(algorithm: HashAlgorithm, size: u32, mode: ColorMode, palette: Arc<Palette>) -> Self {
        Self {
            algorithm,
            size,
            mode,
            transformer: ColorTransformer::new(palette),
        }
    }

    /// Run the full pipeline: digest → channel decode → grid map.
    pub fn generate(&self, text: &str, salt: &str) -> CodecResult<PixelGrid> {
        let hex = digest_hex(text, salt, self.algorithm);
        tracing::debug!(
            algorithm = %self.algorithm,
            size = self.size,
            "Mapping {}-char digest onto grid",
            hex.len()
        );
        let channels = channels::decode(&hex)?;
        map_channels(&channels, self.size, self.mode, &self.transformer)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::grid::Pixel;

    fn rgb_generator(algorithm: HashAlgorithm, size: u32) -> GridGenerator {
        GridGenerator::new(algorithm, size, ColorMode::Rgb, Arc::new(Palette::empty()))
    }

    #[test]
    fn test_end_to_end_hello_sha256_2x2() {
        // SHA-256("hello") = 2cf24dba5fb0a30e...; 32 channels, 4 cells,
        // stride 1, no wrap needed.
        let grid = rgb_generator(HashAlgorithm::Sha256, 2)
            .generate("hello", "")
            .unwrap();

        assert_eq!(grid.pixel(0, 0), Pixel::Rgb([0x2c, 0xf2, 0x4d]));
        assert_eq!(grid.pixel(1, 0), Pixel::Rgb([0xf2, 0x4d, 0xba]));
        assert_eq!(grid.pixel(0, 1), Pixel::Rgb([0x4d, 0xba, 0x5f]));
        assert_eq!(grid.pixel(1, 1), Pixel::Rgb([0xba, 0x5f, 0xb0]));
    }

    #[test]
    fn test_generation_is_reproducible() {
        let generator = rgb_generator(HashAlgorithm::Sha512, 8);
        let a = generator.generate("same text", "same salt").unwrap();
        let b = generator.generate("same text", "same salt").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_salt_changes_grid() {
        let generator = rgb_generator(HashAlgorithm::Sha512, 8);
        let a = generator.generate("text", "0").unwrap();
        let b = generator.generate("text", "1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_grid_larger_than_digest_wraps() {
        // sha256 yields 32 channels; a 16x16 grid needs 256 cells, so the
        // cursor wraps repeatedly and every cell must still be filled.
        let grid = rgb_generator(HashAlgorithm::Sha256, 16)
            .generate("wrap", "")
            .unwrap();
        assert_eq!(grid.cells().len(), 256);
    }

    #[test]
    fn test_cmyk_generator_produces_cmyk_grid() {
        let generator = GridGenerator::new(
            HashAlgorithm::Sha512,
            4,
            ColorMode::Cmyk,
            Arc::new(Palette::empty()),
        );
        let grid = generator.generate("ink", "").unwrap();
        assert!(grid.cells().iter().all(|c| matches!(c, Pixel::Cmyk(_))));
    }

    #[test]
    fn test_palette_constrains_output() {
        let palette = Palette::parse("0 0 0\n255 255 255\n").unwrap();
        let generator = GridGenerator::new(
            HashAlgorithm::Sha512,
            8,
            ColorMode::Rgb,
            Arc::new(palette),
        );
        let grid = generator.generate("quantized", "").unwrap();
        for cell in grid.cells() {
            match cell {
                Pixel::Rgb(rgb) => {
                    assert!(*rgb == [0, 0, 0] || *rgb == [255, 255, 255]);
                }
                Pixel::Cmyk(_) => panic!("unexpected CMYK cell"),
            }
        }
    }
}
