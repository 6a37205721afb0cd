//! Frame sequencer: drives the grid pipeline once per video frame.
//!
//! Each frame re-runs the same digest→decode→map pipeline with the frame
//! index (as a string) for the salt. Frames share nothing but read-only
//! configuration, so they are computed on a bounded blocking-task pool and
//! reassembled in frame-index order before the sink sees them — frame order
//! is semantically meaningful in the output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::digest::HashAlgorithm;
use super::generator::GridGenerator;
use super::grid::{ColorMode, PixelGrid};
use super::palette::Palette;
use crate::error::{CodecError, Prompt2PixelError, Result};

/// Receives completed grids in strictly increasing frame-index order.
pub trait FrameSink {
    /// Accept the next frame's grid.
    fn append(&mut self, grid: PixelGrid) -> Result<()>;

    /// Called once after the final frame; finalize the output.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A sink that buffers every frame in memory. Backs tests and callers that
/// post-process the whole sequence.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub grids: Vec<PixelGrid>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for CollectSink {
    fn append(&mut self, grid: PixelGrid) -> Result<()> {
        self.grids.push(grid);
        Ok(())
    }
}

/// Generates a video frame sequence from one text.
///
/// Video grids are always RGB — CMYK is not defined for video output.
pub struct FrameSequencer {
    generator: Arc<GridGenerator>,
    parallel_workers: usize,
}

impl FrameSequencer {
    pub fn new(
        algorithm: HashAlgorithm,
        size: u32,
        palette: Arc<Palette>,
        parallel_workers: usize,
    ) -> Self {
        Self {
            generator: Arc::new(GridGenerator::new(
                algorithm,
                size,
                ColorMode::Rgb,
                palette,
            )),
            parallel_workers: parallel_workers.max(1),
        }
    }

    /// Generate `frame_count` frames and hand them to `sink` in order.
    ///
    /// Frames are computed in windows of `parallel_workers` blocking tasks;
    /// awaiting the handles in submission order restores frame order before
    /// anything reaches the sink. Fail-fast: the first frame error aborts
    /// the sequence and nothing further is appended.
    ///
    /// `cancel` is checked between windows; a cancelled run surfaces as
    /// [`CodecError::Cancelled`], not as a partial result.
    pub async fn generate<S: FrameSink>(
        &self,
        text: &str,
        frame_count: u32,
        sink: &mut S,
        cancel: Arc<AtomicBool>,
    ) -> Result<()> {
        let text: Arc<str> = Arc::from(text);

        let mut next_frame = 0u32;
        while next_frame < frame_count {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!("Frame generation cancelled at frame {next_frame}");
                return Err(CodecError::Cancelled.into());
            }

            let window_end = frame_count.min(next_frame + self.parallel_workers as u32);
            let mut handles = Vec::with_capacity((window_end - next_frame) as usize);
            for frame_index in next_frame..window_end {
                let generator = Arc::clone(&self.generator);
                let text = Arc::clone(&text);
                handles.push(tokio::task::spawn_blocking(move || {
                    generator.generate(&text, &frame_index.to_string())
                }));
            }

            for handle in handles {
                let grid = handle
                    .await
                    .map_err(|e| Prompt2PixelError::Worker(e.to_string()))??;
                sink.append(grid)?;
            }
            next_frame = window_end;
        }

        sink.finish()
    }

    pub fn generator(&self) -> &GridGenerator {
        &self.generator
    }
}
