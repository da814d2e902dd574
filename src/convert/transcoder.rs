//! Transcoding backends
//!
//! The transcoder is the only external capability the converter depends on,
//! kept behind a trait so the batch pipeline can be tested without ffmpeg.

use crate::error::{Result, SlamError};
use std::path::Path;
use std::process::Command;
use tracing::trace;

/// Sample rate of the canonical PCM format (22050 Hz)
pub const TARGET_SAMPLE_RATE: u32 = 22050;

/// Audio transcoding backend
pub trait Transcoder: Send + Sync {
    /// Transcode `input` into canonical mono/16-bit/22050 Hz PCM at `output`
    fn transcode(&self, input: &Path, output: &Path) -> Result<()>;

    /// Get the name of this backend (for logging)
    fn name(&self) -> &'static str;
}

/// Transcoder shelling out to ffmpeg with a fixed parameter set.
///
/// The bitexact flags make the output byte-identical across repeated runs on
/// the same input, so converted files are reproducible.
#[derive(Debug, Default)]
pub struct FfmpegTranscoder;

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-ac", "1"]) // mono
            .args(["-acodec", "pcm_s16le"]) // 16-bit little-endian
            .arg("-ar")
            .arg(TARGET_SAMPLE_RATE.to_string())
            .arg("-vn") // strip any video stream
            .args(["-flags", "bitexact"])
            .args(["-fflags", "+bitexact"])
            .args(["-flags:v", "+bitexact"])
            .args(["-flags:a", "+bitexact"])
            .arg(output)
            .output();

        let out = result.map_err(|e| SlamError::Conversion {
            path: input.to_path_buf(),
            reason: format!("failed to launch ffmpeg: {}", e),
        })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(SlamError::Conversion {
                path: input.to_path_buf(),
                reason: format!("ffmpeg exited with {}: {}", out.status, stderr.trim()),
            });
        }

        trace!("ffmpeg wrote {}", output.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ffmpeg"
    }
}
