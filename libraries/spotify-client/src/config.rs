//! Client configuration.

use crate::error::{Result, SpotifyError};
use serde::Deserialize;
use std::path::PathBuf;

/// Base URL of the public Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Configuration for connecting to the Spotify Web API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.spotify.com/v1")
    #[serde(default = "default_url")]
    pub url: String,
    /// Bearer token sent with every request, if the transport doesn't add one
    #[serde(default)]
    pub access_token: Option<String>,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config for the given base URL, without a token.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }

    /// Create a config with an access token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::new(url)
        }
    }

    /// Load configuration from `spotify.toml` (if present) and the environment.
    ///
    /// Environment variables are prefixed with `SPOTIFY_`, e.g.
    /// `SPOTIFY_ACCESS_TOKEN` or `SPOTIFY_URL`.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = PathBuf::from("spotify.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        settings =
            settings.add_source(config::Environment::with_prefix("SPOTIFY").try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| SpotifyError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SpotifyError::Config(e.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
