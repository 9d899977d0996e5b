//! Descriptor for the slug ID stored next to the Filmaffinity ID.
//!
//! Catalog URLs look like `/{artist}/{song}`, so the whole URL is stored as
//! the ID and the link format is just `{0}`.

use super::domain::{MediaKind, PROVIDER_NAME, SLUG_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalId;

impl ExternalId {
    pub fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn key(&self) -> &'static str {
        SLUG_KEY
    }

    pub fn url_format(&self) -> &'static str {
        "{0}"
    }

    /// Link for a stored slug ID
    pub fn url(&self, id: &str) -> String {
        self.url_format().replace("{0}", id)
    }

    pub fn supports(&self, kind: MediaKind) -> bool {
        matches!(
            kind,
            MediaKind::MusicVideo | MediaKind::MusicArtist | MediaKind::Person
        )
    }
}
