use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The hosted platform serving both the document store and the generative
/// integrations.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MENOWELL__BACKEND__API_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("backend.base_url", "https://app.base44.com/api/apps/menowell")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MENOWELL")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy variable kept for existing deployments
        if let Ok(api_key) = env::var("BACKEND_API_KEY") {
            builder = builder.set_override("backend.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.backend.base_url.is_empty() {
            return Err("Backend base_url must not be empty".to_string());
        }
        if self.backend.api_key.is_empty() {
            return Err("Backend api_key must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: u16, base_url: &str, api_key: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port,
            },
            backend: BackendConfig {
                base_url: base_url.to_string(),
                api_key: api_key.to_string(),
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        assert!(config(0, "https://backend", "key").validate().is_err());
    }

    #[test]
    fn test_validation_missing_api_key() {
        assert!(config(3000, "https://backend", "").validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config(3000, "https://backend", "key").validate().is_ok());
    }
}
