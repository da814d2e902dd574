//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// slam - Source Live Audio Mixer
///
/// Converts your music library to the voice-loopback PCM format, lets you
/// pick a song, stages it for the game, and writes the key-binding script.
#[derive(Parser, Debug)]
#[command(name = "slam")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Optional path to config file (defaults to probing $XDG_CONFIG_HOME)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the directory songs are configured to be stored in and exit
    #[arg(short = 'D', long)]
    pub printdir: bool,

    /// Number of conversion workers (defaults to CPU count)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress bars)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}
