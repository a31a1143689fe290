//! Client configuration

use std::path::PathBuf;

use crate::client::NetworkHttpClient;
use crate::error::ClientResult;

/// Default backend used when nothing is configured (local dev proxy)
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration for connecting to the catalog backend
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | OFFERZ_API_URL | http://localhost:5000 | Backend base URL |
/// | OFFERZ_TIMEOUT_SECS | 30 | Request timeout |
/// | OFFERZ_DATA_DIR | .offerz | Where the session token is kept |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.clickofferz.com")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding persisted client state
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration. A trailing slash on the URL is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            token: None,
            timeout: 30,
            data_dir: PathBuf::from(".offerz"),
        }
    }

    /// Load configuration from `OFFERZ_*` environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("OFFERZ_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(base_url);
        if let Some(timeout) = std::env::var("OFFERZ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(dir) = std::env::var("OFFERZ_DATA_DIR")
            && !dir.trim().is_empty()
        {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Create a network transport from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_dropped() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::default()
            .with_timeout(5)
            .with_token("t")
            .with_data_dir("/tmp/offerz");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/offerz"));
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }
}
