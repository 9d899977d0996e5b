//! Command-line interface for video-minder.
//!
//! This module provides CLI commands for searching the catalog, resolving
//! videos and artists, and downloading artwork.

mod commands;

pub use commands::{Cli, Commands, run_command};
