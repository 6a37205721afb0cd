//! The `prompt2pixel image` command.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use prompt2pixel_core::{ColorMode, Config, GridGenerator, HashAlgorithm, ImageRenderer};

use crate::sentence;

/// Arguments for the `image` command.
#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Text to hash (defaults to "test string")
    pub text: Option<String>,

    /// Generate the text with the built-in random sentence generator
    #[arg(short, long)]
    pub random_sentence: bool,

    /// Salt appended to the text before hashing
    #[arg(long, default_value = "")]
    pub salt: String,

    /// Hash algorithm (sha256, sha384, sha512, sha3-256, sha3-384,
    /// sha3-512, blake2b, blake2s)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Pixel grid side length
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Store pixels as CMYK instead of RGB
    #[arg(short, long)]
    pub cmyk: bool,

    /// Palette file for nearest-color quantization
    #[arg(short, long)]
    pub palette: Option<PathBuf>,

    /// Output image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file (defaults to a name derived from the text)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the image command.
pub async fn execute(args: ImageArgs, config: &Config) -> anyhow::Result<()> {
    // Validate the cheap inputs before any digest work
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
    let mode = if args.cmyk {
        ColorMode::Cmyk
    } else {
        ColorMode::Rgb
    };
    let width = args.width.unwrap_or(config.render.image_width);
    let height = args.height.unwrap_or(config.render.image_height);

    let output_path = args.output.clone().unwrap_or_else(|| {
        config.output_dir().join(super::derived_file_name(
            &text,
            args.random_sentence,
            mode.label(),
            palette_name.as_deref(),
            "png",
        ))
    });

    let spinner = create_spinner("Generating image...");

    let generator = GridGenerator::new(algorithm, size, mode, Arc::new(palette));
    let grid = generator.generate(&text, &args.salt)?;
    let renderer = ImageRenderer::new(width, height);
    renderer.save(&grid, &output_path)?;

    spinner.finish_and_clear();

    if args.random_sentence {
        println!("Used random text '{text}'");
    }
    println!("Image saved as {}", output_path.display());
    Ok(())
}

/// Create an indeterminate spinner for the generation phase.
fn create_spinner(message: &'static str) -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> ImageArgs {
        ImageArgs {
            text: None,
            random_sentence: false,
            salt: String::new(),
            algorithm: None,
            size: None,
            cmyk: false,
            palette: None,
            width: None,
            height: None,
            output: None,
        }
    }

    #[tokio::test]
    async fn test_execute_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("art.png");

        let args = ImageArgs {
            text: Some("hello".to_string()),
            width: Some(32),
            height: Some(32),
            output: Some(output.clone()),
            ..default_args()
        };
        execute(args, &Config::default()).await.unwrap();
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_execute_rejects_unknown_algorithm() {
        let args = ImageArgs {
            algorithm: Some("md5".to_string()),
            ..default_args()
        };
        assert!(execute(args, &Config::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_rejects_missing_palette_file() {
        let args = ImageArgs {
            palette: Some(PathBuf::from("/nonexistent/colors.gpl")),
            ..default_args()
        };
        assert!(execute(args, &Config::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_cmyk_mode() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ink.png");

        let args = ImageArgs {
            text: Some("hello".to_string()),
            cmyk: true,
            width: Some(16),
            height: Some(16),
            output: Some(output.clone()),
            ..default_args()
        };
        execute(args, &Config::default()).await.unwrap();
        assert!(output.exists());
    }
}
