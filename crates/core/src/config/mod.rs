//! Configuration loading and validation.
//!
//! TOML file merged with `MOVIESDA_`-prefixed environment variables.
//! Every section defaults to a working value so the add-on can start
//! with no configuration at all.

mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid config: {0}")]
    ValidationError(String),
}
