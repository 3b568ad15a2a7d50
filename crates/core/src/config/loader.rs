use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("MOVIESDA_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[server]
port = 9000

[resolver]
fuzzy_fallback = true
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.resolver.fuzzy_fallback);
    }

    #[test]
    fn test_load_config_from_str_empty_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.catalog.path.to_str().unwrap(), "moviesda_full_db.json");
        assert!(!config.resolver.fuzzy_fallback);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_env_overrides_nested_key() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[server]\nport = 3000\n")?;
            jail.set_env("MOVIESDA_RESOLVER__FUZZY_FALLBACK", "true");
            jail.set_env("MOVIESDA_SCRAPER__TIMEOUT_SECS", "99");

            let config = load_config(Path::new("config.toml")).expect("config loads");
            assert!(config.resolver.fuzzy_fallback);
            assert_eq!(config.scraper.timeout_secs, 99);
            // File values not overridden stay intact.
            assert_eq!(config.server.port, 3000);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_simple_key() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "")?;
            jail.set_env("MOVIESDA_SERVER__PORT", "9001");

            let config = load_config(Path::new("config.toml")).expect("config loads");
            assert_eq!(config.server.port, 9001);
            Ok(())
        });
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[catalog]
path = "testdata/db.json"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.catalog.path.to_str().unwrap(), "testdata/db.json");
    }
}
