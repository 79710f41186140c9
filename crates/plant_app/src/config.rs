use log::LevelFilter;
use plant_engine::{CatalogConfig, ClientSettings, VisionConfig};
use thiserror::Error;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const TREFLE_API_TOKEN: &str = "TREFLE_API_TOKEN";
pub const PLANT_VISION_URL: &str = "PLANT_VISION_URL";
pub const PLANT_VISION_MODEL: &str = "PLANT_VISION_MODEL";
pub const PLANT_CATALOG_URL: &str = "PLANT_CATALOG_URL";
pub const PLANT_LOG: &str = "PLANT_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid URL in {var}: {message}")]
    InvalidUrl { var: String, message: String },
}

/// Runtime configuration for the app, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub vision: VisionConfig,
    pub catalog: CatalogConfig,
    pub settings: ClientSettings,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let mut vision = VisionConfig::new(require(OPENAI_API_KEY)?);
        if let Some(endpoint) = get(PLANT_VISION_URL) {
            vision = vision
                .with_endpoint(&endpoint)
                .map_err(|err| invalid_url(PLANT_VISION_URL, err))?;
        }
        if let Some(model) = get(PLANT_VISION_MODEL) {
            vision.model = model;
        }

        let mut catalog = CatalogConfig::new(require(TREFLE_API_TOKEN)?);
        if let Some(base_url) = get(PLANT_CATALOG_URL) {
            catalog = catalog
                .with_base_url(&base_url)
                .map_err(|err| invalid_url(PLANT_CATALOG_URL, err))?;
        }

        let log_level = get(PLANT_LOG)
            .and_then(|name| plant_logging::parse_level(&name))
            .unwrap_or(LevelFilter::Info);

        Ok(Self {
            vision,
            catalog,
            settings: ClientSettings::default(),
            log_level,
        })
    }
}

fn invalid_url(var: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidUrl {
        var: var.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_keys_are_set() {
        let config =
            AppConfig::from_lookup(lookup(&[(OPENAI_API_KEY, "sk"), (TREFLE_API_TOKEN, "tr")]))
                .expect("config");

        assert_eq!(config.vision.api_key, "sk");
        assert_eq!(config.vision.model, plant_engine::DEFAULT_VISION_MODEL);
        assert_eq!(config.catalog.token, "tr");
        assert_eq!(config.catalog.base_url.as_str(), "https://trefle.io/api/v1");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (OPENAI_API_KEY, "sk"),
            (TREFLE_API_TOKEN, "tr"),
            (PLANT_VISION_URL, "http://localhost:8000/v1/chat/completions"),
            (PLANT_VISION_MODEL, "gpt-4o"),
            (PLANT_CATALOG_URL, "http://localhost:8001/api"),
            (PLANT_LOG, "debug"),
        ]))
        .expect("config");

        assert_eq!(config.vision.endpoint.port(), Some(8000));
        assert_eq!(config.vision.model, "gpt-4o");
        assert_eq!(config.catalog.base_url.path(), "/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn missing_or_blank_key_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[(OPENAI_API_KEY, "  "), (TREFLE_API_TOKEN, "tr")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar(OPENAI_API_KEY.to_string()));
    }

    #[test]
    fn malformed_override_is_reported() {
        let err = AppConfig::from_lookup(lookup(&[
            (OPENAI_API_KEY, "sk"),
            (TREFLE_API_TOKEN, "tr"),
            (PLANT_CATALOG_URL, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var, .. } if var == PLANT_CATALOG_URL));
    }
}
