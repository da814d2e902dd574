//! Configuration and CLI handling

pub mod cli;
pub mod resolver;
pub mod settings;

pub use cli::Cli;
pub use resolver::{load_config, resolve_config_path, validate, Config, DEFAULT_BIND_KEY};
pub use settings::Settings;
