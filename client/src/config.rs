//! Client configuration
//!
//! Defaults in code, then an optional `config/client` file, then
//! environment overrides with the POCASIE_CLIENT__ prefix.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{Language, ANIMATIONS_DIR};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,

    /// Language of alerts
    pub language: Language,

    /// Where animation files are served from
    pub animations_dir: String,
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("language", "sk")?
            .set_default("animations_dir", ANIMATIONS_DIR)?
            .add_source(File::with_name("config/client").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("POCASIE_CLIENT")
        .prefix_separator("__")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = ClientConfig::load().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.language, Language::Slovak);
        assert_eq!(config.animations_dir, "animations");
    }

    #[test]
    fn test_environment_language_is_case_insensitive() {
        let vars = [
            ("POCASIE_CLIENT__LANGUAGE", "EN"),
            ("POCASIE_CLIENT__API_URL", "http://meteo.test/api"),
        ];
        let source = vars
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let config = ClientConfig::load_with(environment().source(Some(source))).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.api_url, "http://meteo.test/api");
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let source = [("POCASIE_CLIENT__LANGUAGE".to_string(), "de".to_string())]
            .into_iter()
            .collect();
        assert!(ClientConfig::load_with(environment().source(Some(source))).is_err());
    }
}
