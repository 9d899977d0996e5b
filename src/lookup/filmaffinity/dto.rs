//! Filmaffinity API Data Transfer Objects
//!
//! These types match EXACTLY what the Filmaffinity API returns.
//! DO NOT use these types outside the filmaffinity and provider modules -
//! convert them to domain types first.
//!
//! The `image` field of a video is not a plain object: the API sends `[]`
//! when a video has no artwork. See [`super::image`] for how that is decoded.

use serde::{Deserialize, Serialize};

use super::image;

/// Search response envelope, shared by `/search/videos` and `/search/entities`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResponse<T> {
    /// Matches in relevance order
    #[serde(default)]
    pub results: Vec<T>,
}

impl<T> Default for SearchResponse<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

/// A music video record (`/video/{id}` and `/search/videos` results)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    /// Catalog ID
    pub id: u64,
    /// Song title
    pub song_title: Option<String>,
    /// Human-readable page on the catalog site
    pub url: Option<String>,
    /// Release year
    pub year: Option<i32>,
    /// Performing artists, in credit order
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// Cover image tiers; `[]` and all-null objects decode to `None`
    #[serde(default, deserialize_with = "image::deserialize")]
    pub image: Option<Image>,
    /// Directors, in credit order
    #[serde(default)]
    pub directors: Vec<Director>,
}

/// Artist entity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    /// Catalog ID
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Discogs artist ID, when the catalog knows it
    pub discogs_id: Option<i64>,
}

/// Director credit on a video
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Director {
    #[serde(rename = "entity_id")]
    pub id: u64,
    #[serde(rename = "entity_name", default)]
    pub name: String,
    /// Role label (e.g. "Director", "Co-Director")
    #[serde(rename = "position_name", default)]
    pub position: String,
    #[serde(rename = "entity_url", default)]
    pub url: String,
}

/// Cover image URLs at decreasing resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    /// Raw, largest image
    #[serde(rename = "o")]
    pub full: Option<String>,
    /// 224x126
    #[serde(rename = "l")]
    pub large: Option<String>,
    /// 125x70
    #[serde(rename = "b")]
    pub small: Option<String>,
    /// 50x28
    #[serde(rename = "t")]
    pub thumbnail: Option<String>,
}

impl Image {
    /// True when none of the four tiers carries a URL
    pub fn is_empty(&self) -> bool {
        self.full.is_none()
            && self.large.is_none()
            && self.small.is_none()
            && self.thumbnail.is_none()
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
