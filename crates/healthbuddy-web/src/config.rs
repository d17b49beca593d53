use config::{Config as ConfigLoader, ConfigError, Environment, File};
use healthbuddy_core::DEFAULT_MODEL;
use healthbuddy_llm::{ProviderConfig, ProviderType};
use serde::Deserialize;
use std::path::Path;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a whole request, including the completion call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    #[serde(default)]
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: ProviderType,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Conversations untouched for this long are discarded
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 60 * 60,
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables, e.g. HEALTHBUDDY_SERVER__PORT=8080
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("HEALTHBUDDY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        // Load secrets from ENV (not in TOML)
        cfg.api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ConfigError::Message(format!("{} environment variable is required", API_KEY_VAR))
        })?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn provider(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.llm.provider,
            api_key: self.api_key.clone(),
            base_url: self.llm.base_url.clone(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
