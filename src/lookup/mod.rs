//! Metadata lookup - resolves music videos and artists against the Filmaffinity catalog.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Library-side types (queries, items, results)
//! - **API DTOs** (`filmaffinity/dto.rs`) - Exact API response shapes
//! - **Adapters** (`filmaffinity/adapter.rs`) - Convert DTOs to domain models
//! - **Gateway** (`filmaffinity/client.rs`) - HTTP calls, API key and error mapping
//! - **Providers** (`video.rs`, `artist.rs`, `images.rs`) - Search and resolve flows
//!
//! # Usage
//!
//! ```ignore
//! use video_minder::lookup::{FilmaffinityClient, VideoInfo, VideoProvider};
//!
//! let client = FilmaffinityClient::new(transport, Arc::new(Some(api_key)));
//! let provider = VideoProvider::new(Arc::new(client));
//!
//! let info = VideoInfo::new("Sober").with_artist("Tool");
//! let result = provider.resolve_video_metadata(&info, &CancellationToken::new()).await?;
//! if result.has_metadata {
//!     println!("{:?}", result.item);
//! }
//! ```

pub mod artist;
pub mod domain;
pub mod external_id;
pub mod filmaffinity;
pub mod images;
pub mod traits;
pub mod transport;
pub mod video;

pub use artist::ArtistProvider;
pub use domain::{
    ArtistInfo, HasProviderIds, ImageType, LookupError, MediaKind, MetadataResult, MusicArtist,
    MusicVideo, PROVIDER_NAME, PersonInfo, PersonKind, RemoteImageInfo, RemoteSearchResult,
    SLUG_KEY, VideoInfo,
};
pub use external_id::ExternalId;
pub use filmaffinity::FilmaffinityClient;
pub use images::ImageProvider;
pub use traits::{FilmaffinityApi, RemoteMetadataProvider};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
pub use video::VideoProvider;
