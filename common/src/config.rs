use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Runtime configuration published by the host at `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Base URL of the resource-access backend, without trailing slash.
    pub api_url: String,
}

impl RuntimeConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for `path` (with or without a leading slash).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
