//! Filmaffinity API integration
//!
//! Searches the music video catalog and fetches single videos and artist
//! entities by ID. Requires an application key.

pub mod adapter;
pub mod dto;
pub mod image;
mod client;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, FilmaffinityClient, video_search_query};
