//! Per-pixel color transforms: palette quantization and RGB→CMYK.
//!
//! The two stages are independent and composable, always in this order:
//! quantize first, then convert — CMYK values are computed from the
//! already-quantized RGB when both are enabled.

use std::sync::Arc;

use super::grid::{ColorMode, Pixel};
use super::palette::{Palette, Rgb};

/// A CMYK color quadruple, each channel in `[0, 255]`.
pub type Cmyk = [u8; 4];

/// Applies the optional per-pixel transforms before a pixel is stored.
///
/// Holds only a shared reference to the palette; cloning is cheap and the
/// transformer can be handed to any number of concurrent frame workers.
#[derive(Debug, Clone)]
pub struct ColorTransformer {
    palette: Arc<Palette>,
}

impl ColorTransformer {
    pub fn new(palette: Arc<Palette>) -> Self {
        Self { palette }
    }

    /// A transformer with no palette (quantization is the identity).
    pub fn identity() -> Self {
        Self::new(Arc::new(Palette::empty()))
    }

    /// Snap a color to the nearest palette entry (identity when empty).
    pub fn quantize(&self, rgb: Rgb) -> Rgb {
        self.palette.nearest(rgb)
    }

    /// Quantize, then store as RGB or convert to CMYK per the grid mode.
    pub fn transform(&self, rgb: Rgb, mode: ColorMode) -> Pixel {
        let rgb = self.quantize(rgb);
        match mode {
            ColorMode::Rgb => Pixel::Rgb(rgb),
            ColorMode::Cmyk => Pixel::Cmyk(rgb_to_cmyk(rgb)),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for ColorTransformer {
    fn default() -> Self {
        Self::identity()
    }
}

/// Convert an RGB triple to CMYK, all channels scaled to `[0, 255]`.
///
/// Pure black is special-cased to `(0, 0, 0, 255)` — the `(1 - k)` divisor
/// is undefined there. Channels are rounded with `f64::round`
/// (half away from zero).
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return [0, 0, 0, 255];
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    [scale(c), scale(m), scale(y), scale(k)]
}

fn scale(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk_pure_black_boundary() {
        assert_eq!(rgb_to_cmyk([0, 0, 0]), [0, 0, 0, 255]);
    }

    #[test]
    fn test_cmyk_pure_white() {
        assert_eq!(rgb_to_cmyk([255, 255, 255]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_cmyk_primaries() {
        assert_eq!(rgb_to_cmyk([255, 0, 0]), [0, 255, 255, 0]);
        assert_eq!(rgb_to_cmyk([0, 255, 0]), [255, 0, 255, 0]);
        assert_eq!(rgb_to_cmyk([0, 0, 255]), [255, 255, 0, 0]);
    }

    #[test]
    fn test_cmyk_mid_gray() {
        // k = 127/255, c = m = y = 0
        assert_eq!(rgb_to_cmyk([128, 128, 128]), [0, 0, 0, 127]);
    }

    #[test]
    fn test_cmyk_channels_never_exceed_range() {
        for value in [0u8, 1, 63, 127, 128, 200, 254, 255] {
            let cmyk = rgb_to_cmyk([value, 255 - value, value / 2]);
            // u8 guarantees the range; assert the conversion is stable
            assert_eq!(cmyk, rgb_to_cmyk([value, 255 - value, value / 2]));
        }
    }

    #[test]
    fn test_transform_rgb_mode_stores_rgb() {
        let transformer = ColorTransformer::identity();
        assert_eq!(
            transformer.transform([7, 8, 9], ColorMode::Rgb),
            Pixel::Rgb([7, 8, 9])
        );
    }

    #[test]
    fn test_transform_cmyk_mode_converts() {
        let transformer = ColorTransformer::identity();
        assert_eq!(
            transformer.transform([0, 0, 0], ColorMode::Cmyk),
            Pixel::Cmyk([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_transform_quantizes_before_cmyk() {
        let palette = Palette::parse("0 0 0\n255 255 255\n").unwrap();
        let transformer = ColorTransformer::new(Arc::new(palette));
        // (10,10,10) quantizes to black, which converts to pure-K CMYK
        assert_eq!(
            transformer.transform([10, 10, 10], ColorMode::Cmyk),
            Pixel::Cmyk([0, 0, 0, 255])
        );
    }

    #[test]
    fn test_quantize_identity_without_palette() {
        let transformer = ColorTransformer::identity();
        assert_eq!(transformer.quantize([1, 2, 3]), [1, 2, 3]);
    }
}
