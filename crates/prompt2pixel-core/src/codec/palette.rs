//! Palette index: loads a reference-color list and answers nearest-color
//! queries.
//!
//! The file format is line-oriented (GIMP `.gpl` files parse cleanly):
//! blank lines and `#`-comment lines are skipped, header lines are ignored,
//! and any line starting with a digit is read as `r g b`, with trailing
//! tokens (color names) ignored. Entry order is preserved — it breaks ties
//! during quantization.

use std::path::Path;

use crate::error::PaletteError;

/// An RGB color triple.
pub type Rgb = [u8; 3];

/// An ordered, immutable set of reference colors.
///
/// Loaded once per run and shared read-only across all pixels and frames;
/// an empty palette makes quantization the identity transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    name: Option<String>,
}

impl Palette {
    /// The empty palette (quantization passes colors through unchanged).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a palette from a file, taking its name from the file stem.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut palette = Self::parse(&content)?;
        palette.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        Ok(palette)
    }

    /// Parse palette text. Fails on the first malformed data line; no
    /// partial palette is produced.
    pub fn parse(content: &str) -> Result<Self, PaletteError> {
        let mut colors = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Header lines like "GIMP Palette" or "Name: foo" start with a
            // letter and are skipped.
            if !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }

            let malformed = || PaletteError::MalformedLine {
                line: index + 1,
                content: raw.to_string(),
            };

            let mut tokens = line.split_whitespace();
            let mut component = || -> Result<u8, PaletteError> {
                tokens
                    .next()
                    .ok_or_else(&malformed)?
                    .parse::<u8>()
                    .map_err(|_| malformed())
            };
            let r = component()?;
            let g = component()?;
            let b = component()?;
            colors.push([r, g, b]);
        }

        Ok(Self { colors, name: None })
    }

    /// Nearest palette entry by squared Euclidean distance; ties go to the
    /// earlier entry. Returns the input unchanged for an empty palette.
    pub fn nearest(&self, rgb: Rgb) -> Rgb {
        let mut best = rgb;
        let mut best_dist = i64::MAX;
        for &candidate in &self.colors {
            let dist = squared_distance(rgb, candidate);
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Palette name (file stem), if loaded from disk.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn squared_distance(a: Rgb, b: Rgb) -> i64 {
    let dr = a[0] as i64 - b[0] as i64;
    let dg = a[1] as i64 - b[1] as i64;
    let db = a[2] as i64 - b[2] as i64;
    dr * dr + dg * dg + db * db
}
