//! prompt2pixel CLI - deterministic hash-to-pixel art and video generation.
//!
//! prompt2pixel hashes a text string and reinterprets the digest bytes as
//! pixel color data, producing a still image or an MP4 video.
//!
//! # Usage
//!
//! ```bash
//! # Generate an image from a prompt
//! prompt2pixel image "hello world"
//!
//! # Generate a 60-frame video
//! prompt2pixel video "hello world" --frames 60
//!
//! # Generate from a random sentence, quantized to a palette
//! prompt2pixel image --random-sentence --palette colors.gpl
//!
//! # View configuration
//! prompt2pixel config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;
mod sentence;

/// prompt2pixel - deterministic hash-to-pixel art and video generation.
#[derive(Parser, Debug)]
#[command(name = "prompt2pixel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a still image from text
    Image(cli::image::ImageArgs),

    /// Generate an MP4 video from text (one re-salted grid per frame)
    Video(cli::video::VideoArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match prompt2pixel_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `prompt2pixel config path`."
            );
            prompt2pixel_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("prompt2pixel v{}", prompt2pixel_core::VERSION);

    match cli.command {
        Commands::Image(args) => cli::image::execute(args, &config).await,
        Commands::Video(args) => cli::video::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
