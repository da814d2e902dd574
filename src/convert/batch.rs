//! Parallel batch conversion
//!
//! Jobs are independent, so there is no ordering guarantee. One corrupt file
//! must not block conversion of the rest: failures are collected and reported
//! after the whole batch finishes instead of aborting sibling jobs.

use super::{convert_file, Transcoder};
use crate::error::{Result, SlamError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a conversion batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of files converted successfully
    pub converted: usize,
    /// Per-file failures, in no particular order
    pub failures: Vec<SlamError>,
}

/// Convert all inputs across up to `threads` workers.
///
/// Failures never abort sibling jobs; they are logged after the batch and
/// returned in the summary.
pub fn run_batch(
    transcoder: &dyn Transcoder,
    inputs: &[PathBuf],
    threads: usize,
    show_progress: bool,
) -> BatchSummary {
    if inputs.is_empty() {
        return BatchSummary::default();
    }

    info!(
        "Converting {} files with {} ({} workers)",
        inputs.len(),
        transcoder.name(),
        threads
    );

    let progress = if show_progress {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results = match rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
    {
        Ok(pool) => pool.install(|| convert_all(transcoder, inputs, progress.as_ref())),
        Err(e) => {
            // Fall back to the default rayon pool rather than giving up.
            warn!("Failed to build conversion pool ({}), using default parallelism", e);
            convert_all(transcoder, inputs, progress.as_ref())
        }
    };

    if let Some(pb) = &progress {
        pb.finish_with_message("Conversion complete");
    }

    let mut summary = BatchSummary::default();
    for result in results {
        match result {
            Ok(path) => {
                debug!("Converted {}", path.display());
                summary.converted += 1;
            }
            Err(e) => summary.failures.push(e),
        }
    }

    info!(
        "Batch complete: {} converted, {} failed",
        summary.converted,
        summary.failures.len()
    );
    summary
}

fn convert_all(
    transcoder: &dyn Transcoder,
    inputs: &[PathBuf],
    progress: Option<&ProgressBar>,
) -> Vec<Result<PathBuf>> {
    inputs
        .par_iter()
        .map(|input| {
            let result = convert_file(transcoder, input);
            if let Some(pb) = progress {
                pb.inc(1);
                if let Some(name) = input.file_name() {
                    pb.set_message(name.to_string_lossy().into_owned());
                }
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::CONVERTED_DIR;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Fails for inputs whose stem starts with "bad", copies bytes otherwise
    struct FlakyTranscoder;

    impl Transcoder for FlakyTranscoder {
        fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
            let stem = input.file_stem().unwrap().to_string_lossy();
            if stem.starts_with("bad") {
                return Err(SlamError::Conversion {
                    path: input.to_path_buf(),
                    reason: "simulated corrupt file".to_string(),
                });
            }
            fs::copy(input, output)?;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "flaky"
        }
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let summary = run_batch(&FlakyTranscoder, &[], 2, false);
        assert_eq!(summary.converted, 0);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_one_failure_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        let mut inputs = Vec::new();
        for name in ["one.mp3", "bad.mp3", "two.ogg", "three.flac"] {
            let path = dir.path().join(name);
            fs::write(&path, b"audio").unwrap();
            inputs.push(path);
        }

        let summary = run_batch(&FlakyTranscoder, &inputs, 2, false);

        assert_eq!(summary.converted, 3);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].is_recoverable());

        let converted = dir.path().join(CONVERTED_DIR);
        assert!(converted.join("one.wav").exists());
        assert!(converted.join("two.wav").exists());
        assert!(converted.join("three.wav").exists());
        assert!(!converted.join("bad.wav").exists());
        // The failing job must leave its source in place.
        assert!(dir.path().join("bad.mp3").exists());
        assert!(!dir.path().join("one.mp3").exists());
    }

    #[test]
    fn test_workers_race_safely_on_output_dir() {
        let dir = TempDir::new().unwrap();
        let inputs: Vec<PathBuf> = (0..16)
            .map(|i| {
                let path = dir.path().join(format!("track_{:02}.mp3", i));
                fs::write(&path, b"audio").unwrap();
                path
            })
            .collect();

        let summary = run_batch(&FlakyTranscoder, &inputs, 8, false);

        assert_eq!(summary.converted, 16);
        assert!(summary.failures.is_empty());
        for i in 0..16 {
            assert!(dir
                .path()
                .join(CONVERTED_DIR)
                .join(format!("track_{:02}.wav", i))
                .exists());
        }
    }
}
