//! Remote image provider for music videos
//!
//! Offers the full-resolution cover of a video the item is already linked to.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::domain::{HasProviderIds, ImageType, LookupError, MediaKind, PROVIDER_NAME, RemoteImageInfo};
use super::traits::FilmaffinityApi;
use super::transport::TransportResponse;

pub struct ImageProvider {
    api: Arc<dyn FilmaffinityApi>,
}

impl ImageProvider {
    pub fn new(api: Arc<dyn FilmaffinityApi>) -> Self {
        Self { api }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn supports(&self, kind: MediaKind) -> bool {
        kind == MediaKind::MusicVideo
    }

    pub fn supported_images(&self, kind: MediaKind) -> Vec<ImageType> {
        if self.supports(kind) {
            vec![ImageType::Primary]
        } else {
            Vec::new()
        }
    }

    /// Images for an item linked to a Filmaffinity video
    ///
    /// Items without a stored ID, videos without a full-size cover, and a
    /// missing API key all yield an empty list.
    pub async fn images(
        &self,
        item: &impl HasProviderIds,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>, LookupError> {
        let Some(id) = item.provider_id(PROVIDER_NAME) else {
            return Ok(Vec::new());
        };

        let video = self.api.video_by_id(id, cancel).await?;
        let url = video
            .and_then(|v| v.image)
            .and_then(|image| image.full)
            .filter(|url| !url.is_empty());

        Ok(url
            .map(|url| RemoteImageInfo {
                provider_name: PROVIDER_NAME.to_string(),
                url,
                kind: ImageType::Primary,
            })
            .into_iter()
            .collect())
    }

    pub async fn image_response(
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
    use crate::lookup::domain::MusicVideo;
    use crate::lookup::filmaffinity::dto;
    use crate::lookup::traits::mocks::MockApi;
    use crate::test_utils::make_video;

    fn linked_item(id: &str) -> MusicVideo {
        let mut item = MusicVideo::default();
        item.set_provider_id(PROVIDER_NAME, id);
        item
    }

    #[test]
    fn test_supports_music_videos_only() {
        let provider = ImageProvider::new(Arc::new(MockApi::default()));
        assert_eq!(
            provider.supported_images(MediaKind::MusicVideo),
            vec![ImageType::Primary]
        );
        assert!(provider.supported_images(MediaKind::MusicArtist).is_empty());
        assert!(!provider.supports(MediaKind::Person));
    }

    #[tokio::test]
    async fn test_unlinked_item_has_no_images() {
        let api = Arc::new(MockApi::with_video(make_video(1, "Song")));
        let provider = ImageProvider::new(api.clone());

        let images = provider
            .images(&MusicVideo::default(), &CancellationToken::new())
            .await
            .unwrap();

        assert!(images.is_empty());
        assert!(api.fetched_ids().is_empty());
    }

    #[tokio::test]
    async fn test_full_tier_is_offered_as_primary() {
        let mut video = make_video(1, "Song");
        video.image = Some(dto::Image {
            full: Some("https://img.example.com/o.jpg".to_string()),
            thumbnail: Some("https://img.example.com/t.jpg".to_string()),
            ..Default::default()
        });
        let provider = ImageProvider::new(Arc::new(MockApi::with_video(video)));

        let images = provider
            .images(&linked_item("1"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            images,
            vec![RemoteImageInfo {
                provider_name: PROVIDER_NAME.to_string(),
                url: "https://img.example.com/o.jpg".to_string(),
                kind: ImageType::Primary,
            }]
        );
    }

    #[tokio::test]
    async fn test_video_without_cover_has_no_images() {
        let provider = ImageProvider::new(Arc::new(MockApi::with_video(make_video(1, "Song"))));

        let images = provider
            .images(&linked_item("1"), &CancellationToken::new())
            .await
            .unwrap();

        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_image_response_forwards_to_gateway() {
        let provider = ImageProvider::new(Arc::new(MockApi::default()));

        let response = provider
            .image_response("https://img.example.com/o.jpg", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            &response.bytes().await.unwrap()[..],
            b"https://img.example.com/o.jpg"
        );
    }
}
