//! Artist metadata provider, same flow as [`super::video`] over artist entities.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::domain::{
    ArtistInfo, HasProviderIds, LookupError, MetadataResult, MusicArtist, PROVIDER_NAME,
    RemoteSearchResult,
};
use super::filmaffinity::adapter;
use super::traits::{FilmaffinityApi, RemoteMetadataProvider};
use super::transport::TransportResponse;

/// Metadata provider for artists
pub struct ArtistProvider {
    api: Arc<dyn FilmaffinityApi>,
}

impl ArtistProvider {
    pub fn new(api: Arc<dyn FilmaffinityApi>) -> Self {
        Self { api }
    }

    pub async fn search_artist_results(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteSearchResult>, LookupError> {
        tracing::debug!("Get search result for {}", info.name);

        let Some(response) = self.api.search_artists(info, cancel).await? else {
            return Ok(Vec::new());
        };

        Ok(response
            .results
            .iter()
            .map(adapter::artist_to_search_result)
            .collect())
    }

    pub async fn resolve_artist_metadata(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<MusicArtist>, LookupError> {
        tracing::debug!("Get metadata result for {}", info.name);

        let provider_id = match info.provider_id(PROVIDER_NAME) {
            Some(id) => id.to_string(),
            None => {
                let results = self.search_artist_results(info, cancel).await?;
                match results
                    .first()
                    .and_then(|r| r.provider_id(PROVIDER_NAME))
                {
                    Some(id) => id.to_string(),
                    None => return Ok(MetadataResult::empty()),
                }
            }
        };

        match self.api.artist_by_id(&provider_id, cancel).await {
            Ok(Some(artist)) => Ok(adapter::to_artist_metadata(artist, &provider_id)),
            Ok(None) => Ok(MetadataResult::empty()),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Filmaffinity artist {} not found", provider_id);
                Ok(MetadataResult::empty())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl RemoteMetadataProvider for ArtistProvider {
    type Info = ArtistInfo;
    type Item = MusicArtist;

    async fn search_results(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteSearchResult>, LookupError> {
        self.search_artist_results(info, cancel).await
    }

    async fn metadata(
        &self,
        info: &ArtistInfo,
        cancel: &CancellationToken,
    ) -> Result<MetadataResult<MusicArtist>, LookupError> {
        self.resolve_artist_metadata(info, cancel).await
    }

    async fn image_response(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, LookupError> {
        self.api.image_response(url, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::domain::SLUG_KEY;
    use crate::lookup::traits::mocks::MockApi;
    use crate::test_utils::make_artist;

    #[tokio::test]
    async fn test_search_maps_name_and_id() {
        let api = Arc::new(MockApi {
            artist_search: Some(vec![make_artist(1, "Tool"), make_artist(2, "Tool Tribute")]),
            ..Default::default()
        });

        let results = ArtistProvider::new(api)
            .search_artist_results(&ArtistInfo::new("Tool"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name.as_deref(), Some("Tool"));
        assert_eq!(results[0].provider_id(PROVIDER_NAME), Some("1"));
        assert_eq!(results[1].provider_id(PROVIDER_NAME), Some("2"));
    }

    #[tokio::test]
    async fn test_null_search_gives_empty_results() {
        let api = Arc::new(MockApi::default());

        let results = ArtistProvider::new(api)
            .search_artist_results(&ArtistInfo::new("Tool"), &CancellationToken::new())
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_via_search() {
        let api = Arc::new(MockApi::with_artist(make_artist(634, "Tool")));

        let result = ArtistProvider::new(api.clone())
            .resolve_artist_metadata(&ArtistInfo::new("Tool"), &CancellationToken::new())
            .await
            .unwrap();

        assert!(result.has_metadata);
        assert_eq!(api.fetched_ids(), vec!["634".to_string()]);
        let item = result.item.unwrap();
        assert_eq!(item.name, "Tool");
        assert_eq!(item.provider_id(PROVIDER_NAME), Some("634"));
        assert_eq!(item.provider_id(SLUG_KEY), Some("https://Filmaffinity.com/n/tool"));
    }

    #[tokio::test]
    async fn test_known_id_skips_search() {
        let api = Arc::new(MockApi::with_artist(make_artist(634, "Tool")));

        ArtistProvider::new(api.clone())
            .resolve_artist_metadata(
                &ArtistInfo::new("Tool").with_provider_id("634"),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(api.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_no_match_has_no_metadata() {
        let api = Arc::new(MockApi::no_matches());

        let result = ArtistProvider::new(api.clone())
            .resolve_artist_metadata(&ArtistInfo::new("Nobody"), &CancellationToken::new())
            .await
            .unwrap();

        assert!(!result.has_metadata);
        assert!(api.fetched_ids().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_gives_empty_result() {
        let api = Arc::new(MockApi::with_error(LookupError::NotFound(
            "/entity/404".to_string(),
        )));

        let result = ArtistProvider::new(api.clone())
            .resolve_artist_metadata(
                &ArtistInfo::new("Gone").with_provider_id("404"),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(!result.has_metadata);
        assert!(result.item.is_none());
        assert_eq!(api.fetched_ids(), vec!["404".to_string()]);
    }

    #[tokio::test]
    async fn test_cancellation_propagates() {
        let api = Arc::new(MockApi::with_error(LookupError::Cancelled));

        let err = ArtistProvider::new(api)
            .resolve_artist_metadata(&ArtistInfo::new("Tool"), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Cancelled));
    }
}
