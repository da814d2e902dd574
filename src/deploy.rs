//! Deployment: stage the chosen song and write the key-binding script
//!
//! Best-effort semantics: if the byte copy succeeds but a later script write
//! fails, the copy is not rolled back.

use crate::error::{Result, SlamError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filename the game reads voice loopback audio from
pub const VOICE_INPUT_FILE: &str = "voice_input.wav";

/// Filename of the generated console script in each profile directory
pub const EXEC_SCRIPT_FILE: &str = "pyslam.cfg";

/// Console script template.
///
/// `{key}` appears exactly three times: the bind statement and the embedded
/// re-bind in each of the two alias toggles. All three must carry the same
/// configured key.
const EXEC_SCRIPT_TEMPLATE: &str = r#"// ** ++++ **
// ** SLAM **
// ** ++++ **
clear
bind {key} music_on
alias music_on "voice_inputfromfile 1;+voicerecord; voice_loopback 1; bind {key} music_off"
alias music_off "voice_inputfromfile 0;-voicerecord; voice_loopback 0; bind {key} music_on"
clear
echo "Commands loaded, press the bound key to start / stop playing your song."
"#;

/// Render the console script for the given bind key
pub fn render_script(bind_key: &str) -> String {
    EXEC_SCRIPT_TEMPLATE.replace("{key}", bind_key)
}

/// Copy the chosen song into the game directory and write the exec script
/// into every profile directory, overwriting existing files.
pub fn deploy(
    song: &Path,
    game_dir: &Path,
    profile_dirs: &[PathBuf],
    bind_key: &str,
) -> Result<()> {
    let target = game_dir.join(VOICE_INPUT_FILE);
    fs::copy(song, &target).map_err(|e| SlamError::Deploy {
        path: target.clone(),
        reason: e.to_string(),
    })?;
    info!("Staged {} at {}", song.display(), target.display());

    let script = render_script(bind_key);
    for dir in profile_dirs {
        let path = dir.join(EXEC_SCRIPT_FILE);
        fs::write(&path, &script).map_err(|e| SlamError::Deploy {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!("Wrote exec script {}", path.display());
    }

    Ok(())
}
