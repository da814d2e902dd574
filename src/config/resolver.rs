//! Config file resolution, parsing, and validation
//!
//! A config file is located either from an explicit `--config` path or by
//! probing a fixed list of candidates under the user's config home, first
//! match wins. The parsed document is normalized into an immutable [`Config`]
//! which is validated once before any work starts.

use crate::error::{Result, SlamError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Candidate config locations relative to the config home, probed in order
const CONFIG_CANDIDATES: &[&str] = &[
    "slam.yaml",
    "slam.yml",
    "slam/slam.yaml",
    "slam/slam.yml",
    "slam/config.yaml",
    "slam/config.yml",
];

/// Bind key used when the config does not specify one
pub const DEFAULT_BIND_KEY: &str = "mouse3";

/// Validated runtime configuration, parsed once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Key bound to toggle loopback playback in the generated script
    pub bind_key: String,
    /// Directories scanned for source and converted audio
    pub music_paths: Vec<PathBuf>,
    /// True when `music_paths` is the data-home default rather than configured.
    /// Only the default directory is auto-created during validation.
    pub music_defaulted: bool,
    /// Game installation directory (receives voice_input.wav)
    pub game_dir: PathBuf,
    /// Profile config directories (each receives the exec script)
    pub profile_dirs: Vec<PathBuf>,
}

/// Raw YAML schema before defaulting and normalization
#[derive(Debug, Deserialize)]
struct RawConfig {
    bindkey: Option<String>,
    music: Option<RawMusic>,
    csgo: Option<RawCsgo>,
}

#[derive(Debug, Deserialize)]
struct RawMusic {
    path: Option<OneOrMany>,
    paths: Option<OneOrMany>,
}

#[derive(Debug, Deserialize)]
struct RawCsgo {
    game: Option<PathBuf>,
    user_profile: Option<OneOrMany>,
}

/// Accepts either a single path or a sequence of paths
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<PathBuf> {
        match self {
            OneOrMany::One(path) => vec![path],
            OneOrMany::Many(paths) => paths,
        }
    }
}

/// Locate the config file.
///
/// An explicit path is used verbatim; otherwise the candidates under
/// `config_home` are probed in order and the first existing file wins.
pub fn resolve_config_path(explicit: Option<&Path>, config_home: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    for candidate in CONFIG_CANDIDATES {
        let path = config_home.join(candidate);
        if path.is_file() {
            debug!("Using config file {}", path.display());
            return Ok(path);
        }
    }

    Err(SlamError::ConfigNotFound)
}

/// Parse a config file and apply defaults.
///
/// `data_home` supplies the default music location (`<data_home>/slam/music`)
/// when the config does not list any music path.
pub fn load_config(path: &Path, data_home: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| SlamError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let raw: RawConfig =
        serde_yaml_ng::from_str(&contents).map_err(|e| SlamError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let bind_key = raw
        .bindkey
        .unwrap_or_else(|| DEFAULT_BIND_KEY.to_string());

    // `music.paths` takes precedence over `music.path`; both accept a single
    // string or a list.
    let configured_music = raw
        .music
        .and_then(|music| music.paths.or(music.path))
        .map(OneOrMany::into_vec);
    let (music_paths, music_defaulted) = match configured_music {
        Some(paths) if !paths.is_empty() => (paths, false),
        _ => (vec![data_home.join("slam").join("music")], true),
    };

    let csgo = raw
        .csgo
        .ok_or_else(|| SlamError::ConfigInvalid("csgo section is required".to_string()))?;
    let game_dir = csgo
        .game
        .ok_or_else(|| SlamError::ConfigInvalid("csgo.game is required".to_string()))?;

    let profile_dirs = csgo
        .user_profile
        .map(OneOrMany::into_vec)
        .unwrap_or_else(|| vec![game_dir.join("csgo").join("cfg")]);

    Ok(Config {
        bind_key,
        music_paths,
        music_defaulted,
        game_dir,
        profile_dirs,
    })
}

/// Validate that every referenced directory exists.
///
/// The data-home default music directory is created on demand; configured
/// music paths, the game directory, and profile directories must already
/// exist. The first missing directory fails the whole run.
pub fn validate(config: &Config) -> Result<()> {
    if config.music_defaulted {
        let primary = &config.music_paths[0];
        if !primary.is_dir() {
            fs::create_dir_all(primary).map_err(|e| SlamError::DirectoryUncreatable {
                path: primary.clone(),
                reason: e.to_string(),
            })?;
            info!("Created music directory {}", primary.display());
        }
    }

    for dir in config
        .music_paths
        .iter()
        .chain(config.profile_dirs.iter())
        .chain(std::iter::once(&config.game_dir))
    {
        if !dir.is_dir() {
            return Err(SlamError::DirectoryNotFound(dir.clone()));
        }
    }

    Ok(())
}
