//! Pixel grid mapper: lays a channel sequence onto a square pixel grid.
//!
//! Cells are visited in row-major order and each cell reads three
//! consecutive channels as R,G,B with a stride of one — consecutive pixels
//! share two of their three channels, which is the intended visual-blending
//! property of the scheme. When the cursor would run past the end of the
//! sequence it resets to the start (see [`map_channels`]).

use super::color::ColorTransformer;
use crate::error::{CodecError, CodecResult};

/// Color representation selected at grid-creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Cmyk,
}

impl ColorMode {
    /// Mode label used in derived output filenames ("RGB"/"CMYK").
    pub fn label(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Cmyk => "CMYK",
        }
    }
}

/// One grid cell; a grid holds a single variant throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Rgb([u8; 3]),
    Cmyk([u8; 4]),
}

/// A completed `size × size` grid of pixels.
///
/// Every cell is assigned exactly once during mapping; a grid is never
/// observable in a partially-filled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: u32,
    mode: ColorMode,
    cells: Vec<Pixel>,
}

impl PixelGrid {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Cell at `(x, y)`. Panics if out of bounds, like slice indexing.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.size && y < self.size, "pixel out of bounds");
        self.cells[y as usize * self.size as usize + x as usize]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }
}

/// Minimum channels required to read one full RGB triple.
const MIN_CHANNELS: usize = 3;

/// Total cells in a `size × size` grid, widened to `usize` so the product
/// cannot overflow `u32` for large sizes.
fn cell_count(size: u32) -> usize {
    size as usize * size as usize
}

/// Map a channel sequence onto a `size × size` grid.
///
/// Cursor policy: after each cell the cursor advances by one; when
/// `idx + 2` would reach or exceed `channels.len()`, the cursor resets to
/// zero. The reset (rather than subtractive) wraparound is the canonical
/// policy and is pinned by tests.
pub fn map_channels(
    channels: &[u8],
    size: u32,
    mode: ColorMode,
    transformer: &ColorTransformer,
) -> CodecResult<PixelGrid> {
    if size == 0 || channels.len() < MIN_CHANNELS {
        return Err(CodecError::InsufficientChannels {
            available: channels.len(),
            needed: MIN_CHANNELS,
        });
    }

    let mut cells = Vec::with_capacity(cell_count(size));
    let mut idx = 0usize;

    for _y in 0..size {
        for _x in 0..size {
            let rgb = [channels[idx], channels[idx + 1], channels[idx + 2]];
            cells.push(transformer.transform(rgb, mode));

            idx += 1;
            if idx + 2 >= channels.len() {
                idx = 0;
            }
        }
    }

    Ok(PixelGrid { size, mode, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(channels: &[u8], size: u32) -> PixelGrid {
        map_channels(channels, size, ColorMode::Rgb, &ColorTransformer::identity()).unwrap()
    }

    #[test]
    fn test_grid_is_complete() {
        let channels: Vec<u8> = (0..32).collect();
        for size in [1u32, 2, 3, 8, 16] {
            let grid = map(&channels, size);
            assert_eq!(grid.cells().len(), (size * size) as usize);
        }
    }

    #[test]
    fn test_stride_one_shares_channels_between_neighbors() {
        let channels = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let grid = map(&channels, 2);
        assert_eq!(grid.pixel(0, 0), Pixel::Rgb([1, 2, 3]));
        assert_eq!(grid.pixel(1, 0), Pixel::Rgb([2, 3, 4]));
        assert_eq!(grid.pixel(0, 1), Pixel::Rgb([3, 4, 5]));
        assert_eq!(grid.pixel(1, 1), Pixel::Rgb([4, 5, 6]));
    }

    #[test]
    fn test_cursor_resets_to_start_on_wrap() {
        // 5 channels, 9 cells: the cursor wraps after every third cell,
        // producing a period-3 pattern from the start of the sequence.
        let channels = [1u8, 2, 3, 4, 5];
        let grid = map(&channels, 3);

        let expected = [
            [1, 2, 3],
            [2, 3, 4],
            [3, 4, 5],
            [1, 2, 3],
            [2, 3, 4],
            [3, 4, 5],
            [1, 2, 3],
            [2, 3, 4],
            [3, 4, 5],
        ];
        for (cell, want) in grid.cells().iter().zip(expected) {
            assert_eq!(*cell, Pixel::Rgb(want));
        }
    }

    #[test]
    fn test_exactly_three_channels_repeat_everywhere() {
        let grid = map(&[9, 8, 7], 4);
        assert!(grid.cells().iter().all(|&c| c == Pixel::Rgb([9, 8, 7])));
    }

    #[test]
    fn test_wraparound_is_stable_across_runs() {
        let channels: Vec<u8> = (0..7).collect();
        // Large enough that the cursor wraps many times
        let first = map(&channels, 16);
        let second = map(&channels, 16);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cell_count_does_not_overflow_u32() {
        // 100_000² exceeds u32::MAX; the count must still be exact
        assert_eq!(cell_count(100_000) as u64, 10_000_000_000);
    }

    #[test]
    fn test_rejects_too_few_channels() {
        let err =
            map_channels(&[1, 2], 4, ColorMode::Rgb, &ColorTransformer::identity()).unwrap_err();
        match err {
            CodecError::InsufficientChannels { available, needed } => {
                assert_eq!(available, 2);
                assert_eq!(needed, 3);
            }
            other => panic!("expected InsufficientChannels, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_size_grid() {
        let result = map_channels(
            &[1, 2, 3, 4],
            0,
            ColorMode::Rgb,
            &ColorTransformer::identity(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cmyk_grid_holds_cmyk_cells() {
        let grid = map_channels(
            &[0, 0, 0, 255],
            2,
            ColorMode::Cmyk,
            &ColorTransformer::identity(),
        )
        .unwrap();
        assert_eq!(grid.mode(), ColorMode::Cmyk);
        assert_eq!(grid.pixel(0, 0), Pixel::Cmyk([0, 0, 0, 255]));
        assert!(grid.cells().iter().all(|c| matches!(c, Pixel::Cmyk(_))));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(ColorMode::Rgb.label(), "RGB");
        assert_eq!(ColorMode::Cmyk.label(), "CMYK");
    }
}
