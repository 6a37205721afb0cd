//! Image sink: turns a completed pixel grid into an on-disk image.
//!
//! The codec only guarantees grid content; this module owns resizing and
//! persistence. Grids are upscaled with nearest-neighbor interpolation so
//! the hash blocks stay crisp at the output resolution. CMYK grids are
//! flattened back to RGB for encoding — Rust image encoders have no CMYK
//! color type.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::codec::{Pixel, PixelGrid};
use crate::error::Result;

/// Renders grids to raster images at a fixed output size.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderer {
    width: u32,
    height: u32,
}

impl ImageRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render the grid at the configured output dimensions.
    pub fn render(&self, grid: &PixelGrid) -> RgbImage {
        let raw = grid_to_rgb_image(grid);
        imageops::resize(&raw, self.width, self.height, FilterType::Nearest)
    }

    /// Render and save; the format is chosen from the file extension.
    pub fn save(&self, grid: &PixelGrid, path: &Path) -> Result<()> {
        let image = self.render(grid);
        image.save(path)?;
        tracing::debug!("Wrote {}x{} image to {:?}", self.width, self.height, path);
        Ok(())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Convert a grid to an unscaled `size × size` RGB image.
pub fn grid_to_rgb_image(grid: &PixelGrid) -> RgbImage {
    RgbImage::from_fn(grid.size(), grid.size(), |x, y| {
        Rgb(pixel_to_rgb(grid.pixel(x, y)))
    })
}

fn pixel_to_rgb(pixel: Pixel) -> [u8; 3] {
    match pixel {
        Pixel::Rgb(rgb) => rgb,
        Pixel::Cmyk(cmyk) => cmyk_to_rgb(cmyk),
    }
}

/// Flatten CMYK to RGB: `channel = (255 - c) * (255 - k) / 255`.
fn cmyk_to_rgb([c, m, y, k]: [u8; 4]) -> [u8; 3] {
    let flatten = |ch: u8| {
        (((255 - ch as u32) * (255 - k as u32)) / 255) as u8
    };
    [flatten(c), flatten(m), flatten(y)]
}
