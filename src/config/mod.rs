// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{ChefError, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};

/// Conventional variable holding the Gemini credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Conventional variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `GEMINI_API_KEY` / `PORT` (highest)
    /// 2. `FRIDGE_CHEF__SECTION__KEY` environment variables
    /// 3. Config file (`path`, or `~/.fridge-chef/config.toml`)
    /// 4. Defaults (lowest)
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config = Self::base_builder(&path)?
            .add_source(
                Environment::with_prefix("FRIDGE_CHEF")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("gemini.api_key", non_empty_env(API_KEY_ENV))?
            .set_override_option("server.port", non_empty_env(PORT_ENV))?
            .build()
            .map_err(|e| ChefError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ChefError::Config(e.to_string()))
    }

    /// Load defaults plus a single config file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::base_builder(path)?
            .build()
            .map_err(|e| ChefError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ChefError::Config(e.to_string()))
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(ChefError::Config(format!(
                "{} environment variable is required",
                API_KEY_ENV
            )));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ChefError::Config(
                "server.body_limit_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn base_builder(path: &Path) -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(false)))
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fridge-chef")
            .join("config.toml")
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.body_limit_bytes, 50 * 1024 * 1024);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert!(config.gemini.api_key.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_api_key_passes_validation() {
        let mut config = AppConfig::default();
        config.gemini.api_key = "AIzaTestKey".to_string();
        assert!(config.validate().is_ok());
    }
}
