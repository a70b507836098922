//! Main Spotify Web API client.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result, SpotifyError};
use crate::playlist::PlaylistClient;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the Spotify Web API.
///
/// The client is immutable once built and cheap to clone, so it can be shared
/// between tasks. Each call is a single request/response exchange; dropping
/// the returned future cancels it.
///
/// # Example
///
/// ```ignore
/// use spotify_client::{ClientConfig, Id, SpotifyClient, DEFAULT_API_URL};
///
/// let client = SpotifyClient::new(ClientConfig::with_token(DEFAULT_API_URL, token))?;
/// let playlist = client.playlists().get_playlist(&Id::new("59ZbFPES4DQwEjBpWHzrtC"), &[]).await?;
/// println!("{} ({} tracks)", playlist.name, playlist.tracks.total);
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("spotify-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_http_client(http, config)
    }

    /// Create a client on top of a caller-built transport.
    ///
    /// Timeouts in `config` are ignored; the transport's own settings apply.
    pub fn with_http_client(http: Client, config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(SpotifyError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/');
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SpotifyError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(url).map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(SpotifyError::InvalidUrl(format!("{} cannot be a base URL", url)));
        }

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
        })
    }

    /// Get the base URL, without a trailing slash.
    pub fn url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Playlist operations.
    pub fn playlists(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(self)
    }

    /// Build the URL for the given path segments below the base URL.
    ///
    /// Segments are percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and return the raw body of a 2xx response.
    ///
    /// Transport errors pass through unchanged; any other status becomes
    /// [`SpotifyError::Api`].
    pub(crate) async fn execute_raw(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            debug!(status = status.as_u16(), bytes = body.len(), "Request succeeded");
            Ok(body.to_vec())
        } else {
            let error = ApiError::from_response(status, &body);
            warn!(status = error.status, message = %error.message, "API request failed");
            Err(error.into())
        }
    }

    /// Send a request and decode the JSON body of a 2xx response.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.execute_raw(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
