//! Filmaffinity HTTP client
//!
//! Every request carries `Accept: application/json` and the application key
//! in the `Filmaffinity-APP-KEY` header. The key is read from its source on
//! each call.
//!
//! ## API Quirks
//!
//! ### Search query separator
//! Video searches join the title and artist names with a literal `+`, e.g.
//! `q=Thriller+Michael Jackson`. The query is NOT percent-encoded here; the
//! transport only applies the minimal escaping needed to form a valid URL,
//! which leaves `+` untouched.
//!
//! ### Missing key
//! Lookups by ID return `None` without touching the network when no key is
//! set. Searches still go out (without the key header) and let the server
//! decide.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::dto;
use crate::config::{ApiKeySource, Config};
use crate::lookup::domain::{ArtistInfo, LookupError, VideoInfo};
use crate::lookup::transport::{HttpTransport, ReqwestTransport, TransportResponse};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://Filmaffinity.com/api/v1";

/// Header carrying the application key
pub const API_KEY_HEADER: &str = "Filmaffinity-APP-KEY";

/// Filmaffinity API client
pub struct FilmaffinityClient {
    transport: Arc<dyn HttpTransport>,
    api_key: Arc<dyn ApiKeySource>,
    base_url: String,
}

impl FilmaffinityClient {
    /// Create a client against the production API
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: Arc<dyn ApiKeySource>) -> Self {
        Self {
            transport,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a reqwest transport configured from `config`
    pub fn from_config(
        config: &Config,
        api_key: Arc<dyn ApiKeySource>,
    ) -> Result<Self, LookupError> {
        let transport = ReqwestTransport::new(config.api.timeout())?;
        Ok(Self::new(Arc::new(transport), api_key).with_base_url(&config.api.base_url))
    }

    /// Point the client at another API root (trailing slashes are dropped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search music videos by title and artists
    pub async fn search_videos(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Video>>, LookupError> {
        let url = format!(
            "{}/search/videos?q={}",
            self.base_url,
            video_search_query(&info.name, &info.artists)
        );
        let key = self.api_key();
        self.get_json(&url, key.as_deref(), cancel).await
    }

    /// Search artist entities by name
    pub async fn search_artists(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Artist>>, LookupError> {
        let url = format!("{}/search/entities?q={}", self.base_url, info.name);
        let key = self.api_key();
        self.get_json(&url, key.as_deref(), cancel).await
    }

    /// Fetch a single video; `None` when no API key is configured
    pub async fn video_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Video>, LookupError> {
        let Some(key) = self.api_key() else {
            return Ok(None);
        };

        let url = format!("{}/video/{}", self.base_url, id);
        self.get_json(&url, Some(&key), cancel).await
    }

    /// Fetch a single artist entity; `None` when no API key is configured
    pub async fn artist_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Artist>, LookupError> {
        let Some(key) = self.api_key() else {
            return Ok(None);
        };

        let url = format!("{}/entity/{}", self.base_url, id);
        self.get_json(&url, Some(&key), cancel).await
    }

    /// GET an arbitrary URL and hand the response back untouched
    pub async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LookupError::Cancelled),
            response = self.transport.get(url, HeaderMap::new()) => response,
        }
    }

    /// Current key, or `None` (with a warning) when unset
    fn api_key(&self) -> Option<String> {
        let key = self.api_key.api_key().filter(|k| !k.is_empty());
        if key.is_none() {
            tracing::warn!("Filmaffinity API key is unset");
        }
        key
    }

    fn request_headers(key: Option<&str>) -> Result<HeaderMap, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = key {
            let value = HeaderValue::from_str(key).map_err(|_| {
                LookupError::Protocol("API key is not a valid header value".to_string())
            })?;
            headers.insert(HeaderName::from_static("filmaffinity-app-key"), value);
        }

        Ok(headers)
    }

    /// Send a GET and decode the JSON body, racing the caller's token
    ///
    /// `key` is the value read once at the start of the call. A JSON `null`
    /// body decodes to `Ok(None)`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        key: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Option<T>, LookupError> {
        let headers = Self::request_headers(key)?;

        let request = async {
            let response = self.transport.get(url, headers).await?;
            let status = response.status;

            if status == StatusCode::NOT_FOUND {
                return Err(LookupError::NotFound(url.to_string()));
            }

            if !status.is_success() {
                return Err(LookupError::Protocol(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )));
            }

            let body = response.bytes().await?;
            serde_json::from_slice::<Option<T>>(&body)
                .map_err(|e| LookupError::Protocol(format!("Failed to parse response: {e}")))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request to {} cancelled", url);
                Err(LookupError::Cancelled)
            }
            result = request => result,
        }
    }
}

/// Build the `q` value for a video search: title, then `+artist` for each artist
pub fn video_search_query(name: &str, artists: &[String]) -> String {
    let mut query = String::from(name);
    for artist in artists {
        query.push('+');
        query.push_str(artist);
    }
    query
}
