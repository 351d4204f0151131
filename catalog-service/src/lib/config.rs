use std::env;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Directory served for every path that is not an API route.
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Symmetric secret signing every session credential.
    pub secret: String,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default = "default_secure_cookie")]
    pub secure_cookie: bool,
}

const DEFAULT_RUN_MODE: &str = "production";

fn default_max_connections() -> u32 {
    5
}

fn default_secure_cookie() -> bool {
    true
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CATALOG__SESSION__SECRET, CATALOG__SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// `RUN_MODE` defaults to `production`, which ships no file: the signing
    /// secret must then come from the environment. A missing or empty signing
    /// secret is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| DEFAULT_RUN_MODE.to_string());

        Self::load_for(&run_mode)
    }

    /// Load configuration for an explicit run mode.
    pub fn load_for(run_mode: &str) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: CATALOG__DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("CATALOG").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check invariants the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "session.secret must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
