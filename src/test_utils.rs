//! Test fixtures for video-minder tests.
//!
//! Canned API payloads and DTO factories shared by the gateway, adapter
//! and provider tests.

use crate::lookup::filmaffinity::dto;

/// A `/video/{id}` payload with no artwork (`image: []`) and no page URL.
pub const VIDEO_JSON: &str = r#"{
    "id": 5,
    "song_title": "X",
    "year": 1995,
    "artists": [{"id": 1, "name": "A", "url": "u", "discogs_id": 0}],
    "image": [],
    "directors": []
}"#;

/// A `/search/videos` payload with two hits, the first one with artwork.
pub const VIDEO_SEARCH_JSON: &str = r#"{
    "results": [
        {
            "id": 1208,
            "song_title": "Sober",
            "url": "https://Filmaffinity.com/n/tool/sober",
            "year": 1993,
            "artists": [{"id": 634, "name": "Tool", "url": "https://Filmaffinity.com/n/tool", "discogs_id": 37040}],
            "image": {
                "o": "https://img.example.com/1208/o.jpg",
                "l": "https://img.example.com/1208/l.jpg",
                "b": "https://img.example.com/1208/b.jpg",
                "t": "https://img.example.com/1208/t.jpg"
            }
        },
        {
            "id": 1209,
            "song_title": "Sober (Live)",
            "year": null,
            "artists": [],
            "image": []
        }
    ]
}"#;

/// Minimal video with an ID and title, no URL, artwork, artists or directors.
pub fn make_video(id: u64, title: &str) -> dto::Video {
    dto::Video {
        id,
        song_title: Some(title.to_string()),
        url: None,
        year: None,
        artists: Vec::new(),
        image: None,
        directors: Vec::new(),
    }
}

/// Artist whose URL is derived from the name (`"Tool Tribute"` -> `/n/tool-tribute`).
pub fn make_artist(id: u64, name: &str) -> dto::Artist {
    dto::Artist {
        id,
        name: name.to_string(),
        url: format!(
            "https://Filmaffinity.com/n/{}",
            name.to_lowercase().replace(' ', "-")
        ),
        discogs_id: None,
    }
}
