//! The `prompt2pixel video` command.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Args;
use prompt2pixel_core::{
    CodecError, Config, EncodeSettings, FfmpegEncoder, FrameSequencer, FrameSink, HashAlgorithm,
    PixelGrid, Prompt2PixelError,
};

use crate::sentence;

/// Arguments for the `video` command.
#[derive(Args, Debug)]
pub struct VideoArgs {
    /// Text to hash (defaults to "test string")
    pub text: Option<String>,

    /// Generate the text with the built-in random sentence generator
    #[arg(short, long)]
    pub random_sentence: bool,

    /// Hash algorithm (sha256, sha384, sha512, sha3-256, sha3-384,
    /// sha3-512, blake2b, blake2s)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Pixel grid side length per frame
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Number of frames
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Output frame rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Output video width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output video height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Palette file for nearest-color quantization
    #[arg(short, long)]
    pub palette: Option<PathBuf>,

    /// Number of parallel frame workers
    #[arg(long)]
    pub parallel: Option<usize>,

    /// Output file (defaults to a name derived from the text)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the video command.
pub async fn execute(args: VideoArgs, config: &Config) -> anyhow::Result<()> {
    // Validate algorithm and palette before any frame work begins
    let algorithm = HashAlgorithm::from_str(
        args.algorithm.as_deref().unwrap_or(&config.render.algorithm),
    )?;
    let palette = super::load_palette(args.palette.as_deref())?;
    let palette_name = palette.name().map(|s| s.to_string());

    let text = match &args.text {
        _ if args.random_sentence => sentence::simple_sentence(),
        Some(text) => text.clone(),
        None => "test string".to_string(),
    };

    let size = args.size.unwrap_or(config.render.grid_size);
    let frames = args.frames.unwrap_or(config.video.frames);
    let fps = args.fps.unwrap_or(config.video.fps);
    let width = args.width.unwrap_or(config.video.width);
    let height = args.height.unwrap_or(config.video.height);
    let parallel = args
        .parallel
        .unwrap_or(config.processing.parallel_workers);

    let output_path = args.output.clone().unwrap_or_else(|| {
        config.output_dir().join(super::derived_file_name(
            &text,
            args.random_sentence,
            "RGB",
            palette_name.as_deref(),
            "mp4",
        ))
    });

    let encoder = FfmpegEncoder::spawn(EncodeSettings::new(width, height, fps, &output_path))?;

    // Ctrl-C flips the cancellation flag; the sequencer notices between
    // frames and surfaces Cancelled instead of a partial video.
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    let sequencer = FrameSequencer::new(algorithm, size, Arc::new(palette), parallel);
    let mut sink = ProgressSink::new(encoder, frames);

    tracing::info!("Generating {frames} frames at {width}x{height} ({fps} fps)");
    let result = sequencer
        .generate(&text, frames, &mut sink, cancel)
        .await;
    let (encoder, progress) = sink.into_parts();

    match result {
        Ok(()) => {
            progress.finish_and_clear();
            if args.random_sentence {
                println!("Used random text '{text}'");
            }
            println!("Video saved as {}", output_path.display());
            Ok(())
        }
        Err(Prompt2PixelError::Codec(CodecError::Cancelled)) => {
            progress.abandon();
            encoder.abort();
            println!("Cancelled - no video written");
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            encoder.abort();
            Err(e.into())
        }
    }
}

/// Wraps the encoder to advance a progress bar per appended frame.
struct ProgressSink {
    inner: FfmpegEncoder,
    progress: indicatif::ProgressBar,
}

impl ProgressSink {
    fn new(inner: FfmpegEncoder, total_frames: u32) -> Self {
        Self {
            inner,
            progress: create_progress_bar(total_frames as u64),
        }
    }

    fn into_parts(self) -> (FfmpegEncoder, indicatif::ProgressBar) {
        (self.inner, self.progress)
    }
}

impl FrameSink for ProgressSink {
    fn append(&mut self, grid: PixelGrid) -> prompt2pixel_core::Result<()> {
        self.inner.append(grid)?;
        self.progress.inc(1);
        Ok(())
    }

    fn finish(&mut self) -> prompt2pixel_core::Result<()> {
        self.inner.finish()
    }
}

/// Create a progress bar for frame generation.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_rejects_unknown_algorithm() {
        let args = VideoArgs {
            text: Some("clip".to_string()),
            random_sentence: false,
            algorithm: Some("crc32".to_string()),
            size: None,
            frames: None,
            fps: None,
            width: None,
            height: None,
            palette: None,
            parallel: None,
            output: None,
        };
        assert!(execute(args, &Config::default()).await.is_err());
    }
}
