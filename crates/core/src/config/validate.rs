use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Scraper and resolver timeouts are non-zero
/// - Base URLs are non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.scraper.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "scraper.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.resolver.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "resolver.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.scraper.page_base.is_empty() {
        return Err(ConfigError::ValidationError(
            "scraper.page_base cannot be empty".to_string(),
        ));
    }

    if config.resolver.imdb_base.is_empty() {
        return Err(ConfigError::ValidationError(
            "resolver.imdb_base cannot be empty".to_string(),
        ));
    }

    Ok(())
}
