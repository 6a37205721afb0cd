//! Video sink: streams frames to a system `ffmpeg` process as raw rgb24.
//!
//! Using the `ffmpeg` binary instead of native bindings keeps the build
//! free of FFmpeg dev headers. Each grid is upscaled to the output
//! dimensions before being piped; the encoder produces a yuv420p H.264 MP4.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::codec::{FrameSink, PixelGrid};
use crate::error::{ConfigError, Prompt2PixelError, Result};
use crate::render::ImageRenderer;

/// Output parameters for one video encode.
#[derive(Debug, Clone)]
pub struct EncodeSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub out_path: PathBuf,
}

impl EncodeSettings {
    pub fn new(width: u32, height: u32, fps: u32, out_path: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            fps,
            out_path: out_path.into(),
        }
    }

    /// Reject dimensions/rates the yuv420p MP4 target cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(
                "video width/height must be non-zero".into(),
            )
            .into());
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(ConfigError::ValidationError(
                "video width/height must be even (yuv420p output)".into(),
            )
            .into());
        }
        if self.fps == 0 {
            return Err(ConfigError::ValidationError("video fps must be non-zero".into()).into());
        }
        Ok(())
    }
}

/// Check for a usable `ffmpeg` on PATH, so a missing binary fails before
/// any frame work begins.
pub fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// A [`FrameSink`] that encodes frames into an MP4 via ffmpeg.
pub struct FfmpegEncoder {
    settings: EncodeSettings,
    renderer: ImageRenderer,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    frames_written: u64,
}

impl FfmpegEncoder {
    /// Spawn the encoder process. Fails early if the settings are invalid
    /// or ffmpeg is missing from PATH.
    pub fn spawn(settings: EncodeSettings) -> Result<Self> {
        settings.validate()?;
        ensure_parent_dir(&settings.out_path)?;

        if !ffmpeg_available() {
            return Err(Prompt2PixelError::Encode(
                "ffmpeg is required for MP4 output but was not found on PATH".into(),
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .arg("-y")
            .args([
                "-loglevel",
                "error",
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgb24",
                "-s",
                &format!("{}x{}", settings.width, settings.height),
                "-r",
                &settings.fps.to_string(),
                "-i",
                "pipe:0",
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ])
            .arg(&settings.out_path);

        let mut child = cmd
            .spawn()
            .map_err(|e| Prompt2PixelError::Encode(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Prompt2PixelError::Encode("failed to open ffmpeg stdin".into()))?;

        Ok(Self {
            renderer: ImageRenderer::new(settings.width, settings.height),
            settings,
            child: Some(child),
            stdin: Some(stdin),
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Kill the encoder and remove the partial output file. Used on
    /// cancellation or failure so no partial video is left behind.
    pub fn abort(mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        let _ = std::fs::remove_file(&self.settings.out_path);
    }
}

impl FrameSink for FfmpegEncoder {
    fn append(&mut self, grid: PixelGrid) -> Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| Prompt2PixelError::Encode("encoder is already finalized".into()))?;

        let frame = self.renderer.render(&grid);
        stdin.write_all(frame.as_raw()).map_err(|e| {
            Prompt2PixelError::Encode(format!("failed to write frame to ffmpeg: {e}"))
        })?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // Closing stdin signals end-of-stream to ffmpeg
        drop(self.stdin.take());
        let child = self
            .child
            .take()
            .ok_or_else(|| Prompt2PixelError::Encode("encoder is already finalized".into()))?;

        let output = child
            .wait_with_output()
            .map_err(|e| Prompt2PixelError::Encode(format!("failed to wait for ffmpeg: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Prompt2PixelError::Encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        tracing::info!(
            "Encoded {} frames to {:?}",
            self.frames_written,
            self.settings.out_path
        );
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_reject_zero_dimensions() {
        assert!(EncodeSettings::new(0, 480, 30, "out.mp4").validate().is_err());
        assert!(EncodeSettings::new(640, 0, 30, "out.mp4").validate().is_err());
    }

    #[test]
    fn test_settings_reject_odd_dimensions() {
        assert!(EncodeSettings::new(641, 480, 30, "out.mp4").validate().is_err());
        assert!(EncodeSettings::new(640, 481, 30, "out.mp4").validate().is_err());
    }

    #[test]
    fn test_settings_reject_zero_fps() {
        assert!(EncodeSettings::new(640, 480, 0, "out.mp4").validate().is_err());
    }

    #[test]
    fn test_settings_accept_defaults() {
        assert!(EncodeSettings::new(640, 480, 30, "out.mp4").validate().is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/out.mp4");
        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_filename() {
        assert!(ensure_parent_dir(Path::new("out.mp4")).is_ok());
    }
}
