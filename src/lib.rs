//! Video Minder - music video and artist metadata from the Filmaffinity catalog.
//!
//! The [`lookup`] module holds the catalog client and the providers a media
//! library calls to search, resolve and fetch artwork. The [`cli`] module
//! exposes the same operations from the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;
