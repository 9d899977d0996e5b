//! Music video metadata provider
//!
//! Resolution flow:
//! 1. Use the Filmaffinity ID already stored on the item, if any
//! 2. Otherwise search by title + artists and take the first hit's ID
//! 3. Fetch the full record by ID and map it to a [`MusicVideo`]

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::domain::{
    HasProviderIds, LookupError, MetadataResult, MusicVideo, PROVIDER_NAME, RemoteSearchResult,
    VideoInfo,
};
use super::filmaffinity::adapter;
use super::traits::{FilmaffinityApi, RemoteMetadataProvider};
use super::transport::TransportResponse;

/// Metadata provider for music videos
pub struct VideoProvider {
    api: Arc<dyn FilmaffinityApi>,
}

impl VideoProvider {
    pub fn new(api: Arc<dyn FilmaffinityApi>) -> Self {
        Self { api }
    }

    /// Ranked candidates for `info`; a `null` API answer gives an empty list
    pub async fn search_video_results(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteSearchResult>, LookupError> {
        tracing::debug!("Get search result for {}", info.name);

        let Some(response) = self.api.search_videos(info, cancel).await? else {
            return Ok(Vec::new());
        };

        Ok(response
            .results
            .iter()
            .map(adapter::video_to_search_result)
            .collect())
    }

    /// Resolve `info` to a populated music video
    ///
    /// Returns an empty result (`has_metadata == false`) when no ID can be
    /// found, the fetch yields nothing, or the API reports the ID as unknown.
    pub async fn resolve_video_metadata(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<MusicVideo>, LookupError> {
        tracing::debug!("Get metadata result for {}", info.name);

        let provider_id = match info.provider_id(PROVIDER_NAME) {
            Some(id) => id.to_string(),
            None => {
                let results = self.search_video_results(info, cancel).await?;
                match results
                    .first()
                    .and_then(|r| r.provider_id(PROVIDER_NAME))
                {
                    Some(id) => id.to_string(),
                    None => {
                        tracing::debug!("No Filmaffinity match for {}", info.name);
                        return Ok(MetadataResult::empty());
                    }
                }
            }
        };

        match self.api.video_by_id(&provider_id, cancel).await {
            Ok(Some(video)) => Ok(adapter::to_video_metadata(video, &provider_id)),
            Ok(None) => Ok(MetadataResult::empty()),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Filmaffinity video {} not found", provider_id);
                Ok(MetadataResult::empty())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl RemoteMetadataProvider for VideoProvider {
    type Info = VideoInfo;
    type Item = MusicVideo;

    async fn search_results(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteSearchResult>, LookupError> {
        self.search_video_results(info, cancel).await
    }

    async fn metadata(
        &self,
        info: &VideoInfo,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<MusicVideo>, LookupError> {
        self.resolve_video_metadata(info, cancel).await
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError> {
        self.api.image_response(url, cancel).await
    }
}
