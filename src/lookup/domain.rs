//! Internal domain models for metadata lookup.
//!
//! These types are OUR types - they don't change when the Filmaffinity API
//! changes. API responses get converted into these types via the adapter.

use std::collections::HashMap;

/// Name under which provider IDs are stored on library items, also shown to users
pub const PROVIDER_NAME: &str = "Filmaffinity";

/// Key for the secondary ID built from a record's catalog URL
pub const SLUG_KEY: &str = "Filmaffinity_slug";

/// Provider IDs keyed by provider name
pub type ProviderIds = HashMap<String, String>;

/// Anything that carries provider IDs (queries, items, people, search results)
pub trait HasProviderIds {
    fn provider_ids(&self) -> &ProviderIds;

    fn provider_ids_mut(&mut self) -> &mut ProviderIds;

    /// Look up a provider ID, treating empty strings as unset
    fn provider_id(&self, name: &str) -> Option<&str> {
        self.provider_ids()
            .get(name)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    fn set_provider_id(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.provider_ids_mut().insert(name.into(), id.into());
    }
}

macro_rules! impl_has_provider_ids {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HasProviderIds for $ty {
                fn provider_ids(&self) -> &ProviderIds {
                    &self.provider_ids
                }

                fn provider_ids_mut(&mut self) -> &mut ProviderIds {
                    &mut self.provider_ids
                }
            }
        )+
    };
}

/// Kinds of library item a provider can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    MusicVideo,
    MusicArtist,
    Person,
}

/// Lookup query for a music video
#[derive(Debug, Clone, Default)]
pub struct VideoInfo {
    /// Video (song) title
    pub name: String,
    /// Performing artists; order affects the query string only
    pub artists: Vec<String>,
    /// IDs already stored on the item
    pub provider_ids: ProviderIds,
}

impl VideoInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artists.push(artist.into());
        self
    }

    pub fn with_provider_id(mut self, id: impl Into<String>) -> Self {
        self.set_provider_id(PROVIDER_NAME, id);
        self
    }
}

/// Lookup query for an artist
#[derive(Debug, Clone, Default)]
pub struct ArtistInfo {
    pub name: String,
    pub provider_ids: ProviderIds,
}

impl ArtistInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_provider_id(mut self, id: impl Into<String>) -> Self {
        self.set_provider_id(PROVIDER_NAME, id);
        self
    }
}

/// Image attached to an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemImageInfo {
    /// Remote URL of the image
    pub path: String,
}

/// A populated music video item
#[derive(Debug, Clone, Default)]
pub struct MusicVideo {
    pub name: Option<String>,
    pub production_year: Option<i32>,
    pub artists: Vec<String>,
    pub image_infos: Vec<ItemImageInfo>,
    pub provider_ids: ProviderIds,
}

/// A populated artist item
#[derive(Debug, Clone, Default)]
pub struct MusicArtist {
    pub name: String,
    pub provider_ids: ProviderIds,
}

/// Role of a person attached to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Director,
}

/// Person credited on an item
#[derive(Debug, Clone)]
pub struct PersonInfo {
    pub name: String,
    pub kind: PersonKind,
    pub provider_ids: ProviderIds,
}

/// Result of resolving metadata for one item
#[derive(Debug, Clone)]
pub struct MetadataResult<T> {
    /// False when no record could be resolved; `item` is then `None`
    pub has_metadata: bool,
    pub item: Option<T>,
    pub people: Vec<PersonInfo>,
}

impl<T> MetadataResult<T> {
    /// A result that leaves the caller's metadata unpopulated
    pub fn empty() -> Self {
        Self {
            has_metadata: false,
            item: None,
            people: Vec::new(),
        }
    }

    pub fn found(item: T) -> Self {
        Self {
            has_metadata: true,
            item: Some(item),
            people: Vec::new(),
        }
    }

    pub fn add_person(&mut self, person: PersonInfo) {
        self.people.push(person);
    }
}

impl<T> Default for MetadataResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Candidate summary returned from a search
#[derive(Debug, Clone, Default)]
pub struct RemoteSearchResult {
    pub name: Option<String>,
    pub production_year: Option<i32>,
    pub artists: Vec<String>,
    pub image_url: Option<String>,
    pub provider_ids: ProviderIds,
}

/// Image slots a provider can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Primary,
}

/// Remote image offered for an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteImageInfo {
    pub provider_name: String,
    pub url: String,
    pub kind: ImageType,
}

impl_has_provider_ids!(
    VideoInfo,
    ArtistInfo,
    MusicVideo,
    MusicArtist,
    PersonInfo,
    RemoteSearchResult,
);

/// Errors that can occur during a lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// DNS, connect, timeout and body read failures
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx status, malformed JSON or an API contract violation
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The API answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl LookupError {
    /// True for errors where the server answered but the answer was unusable
    pub fn is_protocol(&self) -> bool {
        matches!(self, LookupError::Protocol(_) | LookupError::NotFound(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_provider_id_is_unset() {
        let mut info = VideoInfo::new("Undertow");
        info.set_provider_id(PROVIDER_NAME, "");
        assert_eq!(info.provider_id(PROVIDER_NAME), None);

        let info = info.with_provider_id("42");
        assert_eq!(info.provider_id(PROVIDER_NAME), Some("42"));
    }

    #[test]
    fn test_empty_metadata_result() {
        let result: MetadataResult<MusicVideo> = MetadataResult::default();
        assert!(!result.has_metadata);
        assert!(result.item.is_none());
        assert!(result.people.is_empty());
    }

    #[test]
    fn test_not_found_is_protocol_class() {
        let err = LookupError::NotFound("/video/1".to_string());
        assert!(err.is_protocol());
        assert!(err.is_not_found());
        assert!(!LookupError::Transport("timeout".to_string()).is_protocol());
        assert!(!LookupError::Cancelled.is_protocol());
    }
}
