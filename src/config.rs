use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// External catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VIBECHECK__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VIBECHECK__LOGGING__LEVEL -> logging.level
            .add_source(
                Environment::with_prefix("VIBECHECK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the bare `CATALOG_PATH` variable on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    override_catalog_path(settings, std::env::var("CATALOG_PATH").ok())
}

fn override_catalog_path(settings: Config, catalog_path: Option<String>) -> Result<Config, ConfigError> {
    let catalog_path = catalog_path.filter(|p| !p.is_empty());

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = catalog_path {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert!(settings.catalog.path.is_none());
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_partial_logging_section() {
        let settings: Settings = Config::builder()
            .set_override("logging.format", "pretty")
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_catalog_path_override_wins() {
        let layered = Config::builder()
            .set_override("catalog.path", "config/catalog.toml")
            .and_then(|b| b.build())
            .unwrap();

        let settings: Settings = override_catalog_path(layered, Some("/srv/vibecheck/questions.toml".to_string()))
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(settings.catalog.path.as_deref(), Some("/srv/vibecheck/questions.toml"));
    }

    #[test]
    fn test_empty_catalog_path_is_ignored() {
        let layered = Config::builder()
            .set_override("catalog.path", "config/catalog.toml")
            .and_then(|b| b.build())
            .unwrap();

        let settings: Settings = override_catalog_path(layered, Some(String::new()))
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert_eq!(settings.catalog.path.as_deref(), Some("config/catalog.toml"));

        let bare: Settings = override_catalog_path(Config::builder().build().unwrap(), None)
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert!(bare.catalog.path.is_none());
    }
}
