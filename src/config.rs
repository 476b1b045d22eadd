//! Client configuration loaded from multiple sources.
//!
//! Configuration is loaded in priority order (lowest to highest):
//! 1. Struct defaults
//! 2. propublica.yaml file (if exists)
//! 3. Environment variables with PPC_ prefix (always wins)

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::transport::DEFAULT_BASE_URL;
use crate::validators;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// API key sent with every request (required — no compiled-in default).
    #[serde(default)]
    pub api_key: String,

    /// Default congress queried when a call supplies no override.
    #[serde(default = "default_congress")]
    pub congress: i64,

    /// Base URL of the upstream API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Latest congress the dataset covers; the upper bound for every
    /// congress validation. Bump this when the upstream dataset moves
    /// forward.
    #[serde(default = "default_congress")]
    pub current_congress: i64,
}

// Cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_congress() -> i64 {
    validators::CURRENT_SESSION
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            congress: default_congress(),
            base_url: default_base_url(),
            current_congress: default_congress(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("propublica.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("PPC_"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !validators::is_valid_api_key(&self.api_key) {
            return Err(ConfigError::Validation(
                "api_key is required. Set the PPC_API_KEY environment variable or configure in propublica.yaml.".into(),
            ));
        }

        if self.current_congress < 1 {
            return Err(ConfigError::Validation(
                "current_congress must be at least 1".into(),
            ));
        }

        if !validators::is_valid_congress_as_of(self.congress, Some(1), self.current_congress) {
            return Err(ConfigError::Validation(format!(
                "congress must be between 1 and {} (current_congress)",
                self.current_congress
            )));
        }

        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("base_url cannot be empty".into()));
        }

        Ok(())
    }
}
