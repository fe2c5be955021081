//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// Port for the `/cafe` endpoint
    pub port: u16,

    /// JSON dataset file; the built-in dataset is used when unset
    pub dataset_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("CAFE_GATEWAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("CAFE_GATEWAY_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),

            dataset_path: lookup("CAFE_GATEWAY_DATASET")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Address to bind, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
