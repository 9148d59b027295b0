//! Host configuration, read from the environment at startup.
//!
//! | Variable              | Default                      |
//! |-----------------------|------------------------------|
//! | `AVIGES_HOST`         | `127.0.0.1`                  |
//! | `AVIGES_PORT`         | `8080`                       |
//! | `AVIGES_API_URL`      | `http://127.0.0.1:5000/api`  |
//! | `AVIGES_OPEN_BROWSER` | `true`                       |

use common::config::{RuntimeConfig, DEFAULT_API_URL};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AVIGES_PORT inválido: {0}")]
    InvalidPort(String),
    #[error("AVIGES_OPEN_BROWSER inválido: {0} (use true/false)")]
    InvalidFlag(String),
    #[error("AVIGES_API_URL vacío")]
    EmptyApiUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Published to the browser at `/config.json`.
    pub runtime: RuntimeConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("AVIGES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("AVIGES_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match lookup("AVIGES_OPEN_BROWSER").as_deref().map(str::trim) {
            None => true,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => return Err(ConfigError::InvalidFlag(other.to_string())),
        };

        let api_url = lookup("AVIGES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        Ok(Self {
            host,
            port,
            open_browser,
            runtime: RuntimeConfig::new(api_url.trim()),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
