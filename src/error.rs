//! Unified error types for slam
//!
//! Error strategy:
//! - Per-file errors (conversion): recoverable, skip the file and continue the batch
//! - Configuration/validation errors: fatal, abort before any work starts
//!
//! Fatal classes map to distinct process exit codes (see [`SlamError::exit_code`])
//! so wrapper scripts can tell failure modes apart.

use std::path::PathBuf;
use thiserror::Error;

/// Source formats accepted for conversion, for helpful error messages
pub const SUPPORTED_FORMATS: &str = "mp3, wav, ogg, flac";

/// Top-level error type for slam operations
#[derive(Debug, Error)]
pub enum SlamError {
    // =========================================================================
    // Recoverable errors - skip file, continue batch
    // =========================================================================
    #[error("Failed to convert '{path}': {reason}\n  Supported formats: {SUPPORTED_FORMATS}")]
    Conversion { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal configuration errors
    // =========================================================================
    #[error("No config file could be found.\n  Tip: create ~/.config/slam/config.yaml or pass --config")]
    ConfigNotFound,

    #[error("Failed to process config file '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Directory '{0}' does not exist.")]
    DirectoryNotFound(PathBuf),

    #[error("Music directory '{path}' does not exist and is unable to be created: {reason}")]
    DirectoryUncreatable { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal runtime errors
    // =========================================================================
    #[error("Selector '{name}' failed: {reason}")]
    Selector { name: String, reason: String },

    #[error("Cannot write '{path}': {reason}\n  Tip: Check write permissions for the target directory")]
    Deploy { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for slam operations
pub type Result<T> = std::result::Result<T, SlamError>;

impl SlamError {
    /// Returns true if this error is recoverable (skip the file, continue the batch)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SlamError::Conversion { .. })
    }

    /// Process exit code for this error class.
    ///
    /// - 1: music directory uncreatable, or any other runtime failure
    /// - 2: a required directory does not exist
    /// - 3: config file missing, unparsable, or missing a required field
    pub fn exit_code(&self) -> u8 {
        match self {
            SlamError::ConfigNotFound
            | SlamError::ConfigParse { .. }
            | SlamError::ConfigInvalid(_) => 3,
            SlamError::DirectoryNotFound(_) => 2,
            _ => 1,
        }
    }
}
