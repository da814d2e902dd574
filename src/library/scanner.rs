//! File discovery and scanning

use super::SongLibrary;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extensions eligible for conversion, matched literally (case-sensitive)
const SOURCE_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac"];

/// Per-directory output subdirectory for converted songs
pub const CONVERTED_DIR: &str = "converted";

/// Find source files awaiting conversion.
///
/// Only the top level of each music directory is scanned; the `converted/`
/// subdirectory (and any other subdirectory) is never entered.
pub fn find_unconverted(music_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir in music_paths {
        for entry in WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && has_source_extension(path) {
                debug!("Needs conversion: {}", path.display());
                files.push(path.to_path_buf());
            }
        }
    }

    info!("Found {} files needing conversion", files.len());
    files
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Build the name -> path mapping of converted songs.
///
/// Lists `*.wav` directly under each music directory's `converted/`
/// subdirectory. Duplicate stems overwrite: the last directory scanned wins.
pub fn find_converted(music_paths: &[PathBuf]) -> SongLibrary {
    let mut songs = SongLibrary::new();

    for dir in music_paths {
        let converted = dir.join(CONVERTED_DIR);
        if !converted.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&converted)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some("wav")
            {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    songs.insert(stem.to_string(), path.to_path_buf());
                }
            }
        }
    }

    if songs.is_empty() {
        warn!("No converted songs found in any music directory");
    } else {
        info!("Found {} converted songs", songs.len());
    }

    songs
}
