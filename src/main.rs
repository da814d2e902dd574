//! slam CLI entry point

use clap::Parser;
use slam::config::{self, Cli, Config, Settings};
use slam::convert::FfmpegTranscoder;
use slam::picker::{MenuCommandPicker, Picker};
use slam::pipeline::{self, Outcome};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    // Resolve and load the config
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    // Print the primary music directory without touching the filesystem
    if cli.printdir {
        println!("{}", config.music_paths[0].display());
        return ExitCode::SUCCESS;
    }

    // Validate directories (creates the default music dir on first run)
    if let Err(e) = config::validate(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(e.exit_code());
    }

    let settings = Settings::new(config, &cli);
    let picker = select_picker();

    // Run the pipeline
    match pipeline::run(&settings, &FfmpegTranscoder, picker.as_ref()) {
        Ok(Outcome::Deployed {
            song,
            converted,
            failed,
        }) => {
            if converted > 0 || failed > 0 {
                println!("Converted {} files ({} failed).", converted, failed);
            }
            println!(
                "Staged '{}'. Press the bound key in game to start / stop playback.",
                song
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::EmptyLibrary) => {
            println!("No songs found. Drop some audio files into your music directory first.");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Aborted) => {
            println!("User aborted. Exiting...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

/// Locate, load, and default the config through the user's XDG base dirs
fn load_config(cli: &Cli) -> slam::Result<Config> {
    let base = directories::BaseDirs::new().ok_or_else(|| {
        slam::SlamError::ConfigInvalid("could not determine home directory".to_string())
    })?;
    let path = config::resolve_config_path(cli.config.as_deref(), base.config_dir())?;
    config::load_config(&path, base.data_dir())
}

/// Pick the selector backend for the current environment: fzf when stdin is
/// an interactive terminal, dmenu otherwise
fn select_picker() -> Box<dyn Picker> {
    if std::io::stdin().is_terminal() {
        Box::new(MenuCommandPicker::fzf())
    } else {
        Box::new(MenuCommandPicker::dmenu())
    }
}
