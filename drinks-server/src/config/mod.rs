pub(crate) use crate::config::auth::AuthConfig;
pub(crate) use crate::config::database::DatabaseConfig;
use confique::Config;
use thiserror::Error;

pub mod auth;
pub mod database;

/// Optional configuration file, read after environment variables
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Load(#[from] confique::Error),
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("Unsupported token algorithm '{0}', expected one of RS256, RS384, RS512")]
    UnsupportedAlgorithm(String),
}

/// Main configuration structure for the drinks server
#[derive(Debug, Config, Clone)]
pub struct AppConfig {
    /// The port the server will listen to (default: 5000)
    #[config(env = "DRINKS_PORT", default = 5000)]
    pub port: u16,

    /// Identity provider configuration
    #[config(nested)]
    pub auth: AuthConfig,

    /// Database configuration
    #[config(nested)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads the configuration from environment variables and the optional
    /// `config.toml`, environment taking precedence
    pub fn new() -> Result<Self, ConfigError> {
        let config = Self::builder().env().file(CONFIG_FILE).load()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that can only be verified once loaded
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.jwks_url()?;
        self.auth.algorithm()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn for_test_with_mocks(issuer_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            auth: AuthConfig::for_test(format!("{}/", issuer_mock.uri())),
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                reset_on_start: false,
            },
        }
    }
}
