//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout stays free for user-facing output. The
//! level comes from `RUST_LOG` when set, otherwise from the config file,
//! with `--verbose` forcing debug; `--json-logs` switches to JSON lines.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prompt2pixel_core::Config;

pub fn init_from_config(config: &Config, verbose: bool, json_logs: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs || config.logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
