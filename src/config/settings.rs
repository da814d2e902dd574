//! Runtime configuration settings

use super::cli::Cli;
use super::resolver::Config;

/// Runtime settings for a pipeline run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Validated configuration
    pub config: Config,
    /// Number of parallel conversion workers
    pub convert_threads: usize,
    /// Show progress bars during batch conversion
    pub show_progress: bool,
}

impl Settings {
    /// Create settings from the validated config and CLI arguments
    pub fn new(config: Config, cli: &Cli) -> Self {
        let convert_threads = cli.threads.unwrap_or_else(|| num_cpus::get().max(1));

        Self {
            config,
            convert_threads,
            show_progress: !cli.quiet,
        }
    }
}
