//! Adapter layer: Convert Filmaffinity DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! Only the full-resolution image tier ever reaches the domain side.

use super::dto;
use crate::lookup::domain::{
    HasProviderIds, ItemImageInfo, MetadataResult, MusicArtist, MusicVideo, PROVIDER_NAME,
    PersonInfo, PersonKind, RemoteSearchResult, SLUG_KEY,
};

/// Summarize a video search hit
pub fn video_to_search_result(video: &dto::Video) -> RemoteSearchResult {
    let mut result = RemoteSearchResult {
        name: video.song_title.clone(),
        production_year: video.year,
        artists: artist_names(&video.artists),
        image_url: full_image_url(video.image.as_ref()),
        ..Default::default()
    };
    result.set_provider_id(PROVIDER_NAME, video.id.to_string());
    result
}

/// Summarize an artist search hit
pub fn artist_to_search_result(artist: &dto::Artist) -> RemoteSearchResult {
    let mut result = RemoteSearchResult {
        name: Some(artist.name.clone()),
        ..Default::default()
    };
    result.set_provider_id(PROVIDER_NAME, artist.id.to_string());
    result
}

/// Build a populated music video result
///
/// `provider_id` is the ID the record was fetched by and is stored as-is.
pub fn to_video_metadata(video: dto::Video, provider_id: &str) -> MetadataResult<MusicVideo> {
    let mut item = MusicVideo {
        name: video.song_title,
        production_year: video.year,
        artists: artist_names(&video.artists),
        ..Default::default()
    };

    if let Some(path) = full_image_url(video.image.as_ref()) {
        item.image_infos = vec![ItemImageInfo { path }];
    }

    item.set_provider_id(PROVIDER_NAME, provider_id);
    if let Some(url) = video.url.filter(|u| !u.is_empty()) {
        item.set_provider_id(SLUG_KEY, url);
    }

    let mut result = MetadataResult::found(item);
    for director in &video.directors {
        result.add_person(director_to_person(director));
    }
    result
}

/// Build a populated artist result
pub fn to_artist_metadata(artist: dto::Artist, provider_id: &str) -> MetadataResult<MusicArtist> {
    let mut item = MusicArtist {
        name: artist.name,
        ..Default::default()
    };

    item.set_provider_id(PROVIDER_NAME, provider_id);
    if !artist.url.is_empty() {
        item.set_provider_id(SLUG_KEY, artist.url);
    }

    MetadataResult::found(item)
}

fn director_to_person(director: &dto::Director) -> PersonInfo {
    let mut person = PersonInfo {
        name: director.name.clone(),
        kind: PersonKind::Director,
        provider_ids: Default::default(),
    };
    person.set_provider_id(PROVIDER_NAME, director.id.to_string());
    person.set_provider_id(SLUG_KEY, director.url.clone());
    person
}

fn artist_names(artists: &[dto::Artist]) -> Vec<String> {
    artists.iter().map(|a| a.name.clone()).collect()
}

fn full_image_url(image: Option<&dto::Image>) -> Option<String> {
    image
        .and_then(|i| i.full.clone())
        .filter(|url| !url.is_empty())
}
