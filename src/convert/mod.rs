//! Audio conversion to the canonical PCM format
//!
//! Every library file is normalized to mono, 16-bit little-endian PCM at
//! 22050 Hz before it can be staged for loopback playback. The transcoder
//! itself is an external capability behind the [`Transcoder`] trait.

pub mod batch;
pub mod transcoder;

pub use batch::{run_batch, BatchSummary};
pub use transcoder::{FfmpegTranscoder, Transcoder, TARGET_SAMPLE_RATE};

use crate::error::{Result, SlamError};
use crate::library::CONVERTED_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Convert one source file and delete it on success.
///
/// The output lands at `<parent>/converted/<stem>.wav`; the `converted/`
/// directory is created on demand. Creation is idempotent, so concurrent
/// workers may race on it safely.
///
/// The source file is removed only after a successful transcode. A failed
/// transcode leaves the source untouched, so a bad conversion never destroys
/// the only copy of the audio.
pub fn convert_file(transcoder: &dyn Transcoder, input: &Path) -> Result<PathBuf> {
    let parent = input.parent().ok_or_else(|| SlamError::Conversion {
        path: input.to_path_buf(),
        reason: "input file has no parent directory".to_string(),
    })?;
    let stem = input.file_stem().ok_or_else(|| SlamError::Conversion {
        path: input.to_path_buf(),
        reason: "input file has no name".to_string(),
    })?;

    let out_dir = parent.join(CONVERTED_DIR);
    fs::create_dir_all(&out_dir).map_err(|e| SlamError::Conversion {
        path: input.to_path_buf(),
        reason: format!("cannot create '{}': {}", out_dir.display(), e),
    })?;

    let output = out_dir.join(format!("{}.wav", stem.to_string_lossy()));
    transcoder.transcode(input, &output)?;

    fs::remove_file(input).map_err(|e| SlamError::Conversion {
        path: input.to_path_buf(),
        reason: format!("converted, but failed to delete source: {}", e),
    })?;

    debug!("Converted {} -> {}", input.display(), output.display());
    Ok(output)
}
