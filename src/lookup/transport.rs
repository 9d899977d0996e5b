//! HTTP transport used by the Filmaffinity client.
//!
//! The host decides how requests go out; production code uses
//! [`ReqwestTransport`], tests use [`mocks::MockTransport`] to script replies
//! and count calls.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::domain::LookupError;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Streaming response body
pub type BodyStream = BoxStream<'static, Result<Bytes, LookupError>>;

/// A raw HTTP response, body not yet read
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: BodyStream,
}

impl TransportResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: BodyStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Response with an in-memory body and no headers
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::new(
            status,
            HeaderMap::new(),
            stream::once(async move { Ok(body) }).boxed(),
        )
    }

    /// Read the whole body into memory
    pub async fn bytes(mut self) -> Result<Bytes, LookupError> {
        let mut data = Vec::new();
        while let Some(chunk) = self.body.try_next().await? {
            data.extend_from_slice(&chunk);
        }
        Ok(Bytes::from(data))
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Sends GET requests on behalf of the lookup client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and return once the response head has arrived
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<TransportResponse, LookupError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given per-request timeout
    ///
    /// The client accepts gzip-compressed responses and identifies itself
    /// with the crate name and version.
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Wrap an already configured client
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<TransportResponse, LookupError> {
        let response = self
            .http_client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes_stream().map_err(map_reqwest_error).boxed();

        Ok(TransportResponse::new(status, headers, body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> LookupError {
    if e.is_builder() {
        LookupError::Protocol(format!("Invalid request: {e}"))
    } else {
        LookupError::Transport(e.to_string())
    }
}
