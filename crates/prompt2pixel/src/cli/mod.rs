//! CLI command implementations.

pub mod config;
pub mod image;
pub mod video;

use std::path::Path;

/// Longest slice of the text carried into a derived filename.
const FILENAME_TEXT_LIMIT: usize = 32;

/// Build a derived output filename: `{text}-{MODE}{-palette}.{ext}`.
///
/// When the text came from the random-sentence generator, exactly one
/// trailing period is stripped — for labeling only, the hash always sees
/// the full sentence. The text is truncated to 32 characters.
pub(crate) fn derived_file_name(
    text: &str,
    random_sentence: bool,
    mode_label: &str,
    palette_name: Option<&str>,
    extension: &str,
) -> String {
    let label = if random_sentence {
        text.strip_suffix('.').unwrap_or(text)
    } else {
        text
    };
    let label: String = label.chars().take(FILENAME_TEXT_LIMIT).collect();
    let palette_suffix = palette_name
        .map(|name| format!("-{name}"))
        .unwrap_or_default();
    format!("{label}-{mode_label}{palette_suffix}.{extension}")
}

/// Load the palette named by the CLI flag, or the empty palette.
pub(crate) fn load_palette(
    path: Option<&Path>,
) -> anyhow::Result<prompt2pixel_core::Palette> {
    match path {
        Some(path) => {
            let palette = prompt2pixel_core::Palette::load(path)?;
            tracing::info!("Loaded {} palette colors from {:?}", palette.len(), path);
            Ok(palette)
        }
        None => Ok(prompt2pixel_core::Palette::empty()),
    }
}
