//! Trait definitions for the catalog gateway and the metadata providers.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses [`FilmaffinityClient`], while provider tests
//! substitute [`mocks::MockApi`] to count which calls were made.
//!
//! # Example
//!
//! ```ignore
//! use video_minder::lookup::traits::RemoteMetadataProvider;
//!
//! async fn best_match<P: RemoteMetadataProvider>(provider: &P, info: &P::Info) {
//!     let cancel = CancellationToken::new();
//!     let result = provider.metadata(info, &cancel).await?;
//! }
//! ```

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::domain::{
    ArtistInfo, LookupError, MetadataResult, PROVIDER_NAME, RemoteSearchResult, VideoInfo,
};
use super::filmaffinity::{FilmaffinityClient, dto};
use super::transport::TransportResponse;

/// Catalog gateway operations.
#[async_trait]
pub trait FilmaffinityApi: Send + Sync {
    /// Search videos; `None` when the API answered `null`
    async fn search_videos(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Video>>, LookupError>;

    /// Search artist entities; `None` when the API answered `null`
    async fn search_artists(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Artist>>, LookupError>;

    /// Fetch a video; `None` when no API key is configured
    async fn video_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Video>, LookupError>;

    /// Fetch an artist; `None` when no API key is configured
    async fn artist_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Artist>, LookupError>;

    /// Raw GET of an image URL
    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError>;
}

/// Search / resolve / image capability of a metadata provider, per media kind.
#[async_trait]
pub trait RemoteMetadataProvider: Send + Sync {
    /// Query type (what the library knows about the item)
    type Info: Send + Sync;
    /// Item type produced on a successful resolve
    type Item: Send;

    /// Provider name shown to users and used as the provider ID key
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Ranked candidates for `info`, in API order
    async fn search_results(
        &self,
        info: &Self::Info,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteSearchResult>, LookupError>;

    /// Resolve `info` to a single populated item
    async fn metadata(
        &self,
        info: &Self::Info,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<Self::Item>, LookupError>;

    /// Raw GET of an image URL produced by this provider
    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError>;
}

#[async_trait]
impl FilmaffinityApi for FilmaffinityClient {
    async fn search_videos(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Video>>, LookupError> {
        self.search_videos(info, cancel).await
    }

    async fn search_artists(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::SearchResponse<dto::Artist>>, LookupError> {
        self.search_artists(info, cancel).await
    }

    async fn video_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Video>, LookupError> {
        self.video_by_id(id, cancel).await
    }

    async fn artist_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::Artist>, LookupError> {
        self.artist_by_id(id, cancel).await
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError> {
        self.image_response(url, cancel).await
    }
}
