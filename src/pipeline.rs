//! Pipeline orchestration
//!
//! Sequential stages: scan for sources, convert the batch in parallel, scan
//! for converted songs, present the picker, deploy the choice. Everything but
//! the conversion batch is single-threaded and blocking.

use crate::config::Settings;
use crate::convert::{self, Transcoder};
use crate::deploy;
use crate::error::Result;
use crate::library;
use crate::picker::Picker;
use tracing::{info, warn};

/// How a pipeline run ended
#[derive(Debug)]
pub enum Outcome {
    /// A song was staged and the exec script written
    Deployed {
        song: String,
        converted: usize,
        failed: usize,
    },
    /// No converted songs were available to pick from
    EmptyLibrary,
    /// The user dismissed the selector without choosing
    Aborted,
}

/// Run the full staging pipeline
pub fn run(
    settings: &Settings,
    transcoder: &dyn Transcoder,
    picker: &dyn Picker,
) -> Result<Outcome> {
    let config = &settings.config;

    // Phase 1: convert anything new in the library.
    let pending = library::find_unconverted(&config.music_paths);
    let summary = convert::run_batch(
        transcoder,
        &pending,
        settings.convert_threads,
        settings.show_progress,
    );
    for failure in &summary.failures {
        warn!("{}", failure);
    }

    // Phase 2: collect the converted songs.
    let songs = library::find_converted(&config.music_paths);
    if songs.is_empty() {
        return Ok(Outcome::EmptyLibrary);
    }

    // Phase 3: let the user pick.
    let names: Vec<String> = songs.keys().cloned().collect();
    info!("Presenting {} songs via {}", names.len(), picker.name());
    let Some(choice) = picker.pick(&names)? else {
        return Ok(Outcome::Aborted);
    };

    let Some(song_path) = songs.get(&choice) else {
        // dmenu echoes typed text verbatim, which may not be a known song.
        warn!("Selector returned unknown song '{}'", choice);
        return Ok(Outcome::Aborted);
    };

    // Phase 4: stage the song and write the script.
    deploy::deploy(
        song_path,
        &config.game_dir,
        &config.profile_dirs,
        &config.bind_key,
    )?;

    Ok(Outcome::Deployed {
        song: choice,
        converted: summary.converted,
        failed: summary.failures.len(),
    })
}
