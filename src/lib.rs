//! slam - Source Live Audio Mixer
//!
//! A command-line utility that stages a pre-converted audio clip for playback
//! through the CS:GO voice-chat loopback trick: it normalizes library audio to
//! a fixed PCM format, asks the user to pick a song, copies it where the game
//! reads voice input from, and writes a console script binding a key to toggle
//! playback.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: config file resolution, CLI parsing, and runtime settings
//! - `library`: music directory scanning (unconverted sources, converted songs)
//! - `convert`: canonical PCM conversion via ffmpeg and the parallel batch
//! - `picker`: interactive selection backends (fzf, dmenu, swappable for tests)
//! - `deploy`: staging the chosen song and rendering the exec script
//! - `pipeline`: end-to-end orchestration
//!
//! # Example
//!
//! ```no_run
//! use slam::config::{Config, Settings};
//! use slam::convert::FfmpegTranscoder;
//! use slam::picker::MenuCommandPicker;
//! use slam::pipeline;
//!
//! let config = Config {
//!     bind_key: "mouse3".to_string(),
//!     music_paths: vec!["/home/dj/music".into()],
//!     music_defaulted: false,
//!     game_dir: "/games/csgo".into(),
//!     profile_dirs: vec!["/games/csgo/csgo/cfg".into()],
//! };
//! let settings = Settings { config, convert_threads: 4, show_progress: true };
//! let outcome = pipeline::run(&settings, &FfmpegTranscoder, &MenuCommandPicker::fzf())
//!     .expect("pipeline failed");
//! println!("{:?}", outcome);
//! ```

pub mod config;
pub mod convert;
pub mod deploy;
pub mod error;
pub mod library;
pub mod picker;
pub mod pipeline;

// Re-export key types at crate root
pub use error::{Result, SlamError};
pub use library::SongLibrary;
