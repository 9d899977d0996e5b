//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Video and artist searches
//! - `resolve`: Metadata resolution and image listing
//! - `download`: Image download
//! - `settings`: Config file updates

mod download;
mod resolve;
mod search;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::config;
use crate::lookup::{FilmaffinityApi, FilmaffinityClient};

pub use download::cmd_download;
pub use resolve::{cmd_artist, cmd_images, cmd_video};
pub use search::{cmd_search_artists, cmd_search_videos};
pub use settings::cmd_set_key;

/// Video Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Filmaffinity API key (falls back to the config file)
    #[arg(short, long, global = true, env = "FILMAFFINITY_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search music videos by title
    SearchVideos {
        /// Video (song) title
        name: String,
        /// Performing artist, may be repeated
        #[arg(short = 'A', long = "artist")]
        artists: Vec<String>,
    },
    /// Search artists by name
    SearchArtists {
        /// Artist name
        name: String,
    },
    /// Resolve a music video to full metadata
    Video {
        /// Video (song) title
        name: String,
        /// Performing artist, may be repeated
        #[arg(short = 'A', long = "artist")]
        artists: Vec<String>,
        /// Known Filmaffinity ID (skips the search)
        #[arg(long)]
        id: Option<String>,
    },
    /// Resolve an artist to full metadata
    Artist {
        /// Artist name
        name: String,
        /// Known Filmaffinity ID (skips the search)
        #[arg(long)]
        id: Option<String>,
    },
    /// List remote images for a video
    Images {
        /// Filmaffinity video ID
        #[arg(long)]
        id: String,
    },
    /// Download an image URL to a file
    Download {
        /// Image URL
        url: String,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Save an API key to the config file
    SetKey {
        /// Filmaffinity API key (empty clears it)
        key: String,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::SetKey { key } = &cli.command {
        return cmd_set_key(key);
    }

    let rt = Runtime::new()?;
    let api = build_api(cli.api_key.clone())?;
    let cancel = CancellationToken::new();

    // Ctrl-C cancels the in-flight request
    {
        let cancel = cancel.clone();
        rt.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    match &cli.command {
        Commands::SearchVideos { name, artists } => {
            cmd_search_videos(&rt, api, &cancel, name, artists)
        }
        Commands::SearchArtists { name } => cmd_search_artists(&rt, api, &cancel, name),
        Commands::Video { name, artists, id } => {
            cmd_video(&rt, api, &cancel, name, artists, id.as_deref())
        }
        Commands::Artist { name, id } => cmd_artist(&rt, api, &cancel, name, id.as_deref()),
        Commands::Images { id } => cmd_images(&rt, api, &cancel, id),
        Commands::Download { url, output } => cmd_download(&rt, api, &cancel, url, output),
        Commands::SetKey { key } => cmd_set_key(key),
    }
}

/// Build the gateway from the config file, letting `api_key` override the stored key
fn build_api(api_key: Option<String>) -> anyhow::Result<Arc<dyn FilmaffinityApi>> {
    let config = config::load();
    let key = api_key
        .filter(|k| !k.is_empty())
        .or_else(|| config.credentials.api_key.clone());

    if key.is_none() {
        tracing::warn!("No API key configured; lookups by ID will return nothing");
        if let Some(path) = config::config_path() {
            tracing::info!("Set one with --api-key, FILMAFFINITY_API_KEY or {:?}", path);
        }
    }

    let client = FilmaffinityClient::from_config(&config, Arc::new(key))?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_video_with_artists() {
        let cli = Cli::try_parse_from([
            "video-minder",
            "video",
            "Sober",
            "--artist",
            "Tool",
            "-A",
            "Maynard",
            "--id",
            "1208",
        ])
        .unwrap();

        match cli.command {
            Commands::Video { name, artists, id } => {
                assert_eq!(name, "Sober");
                assert_eq!(artists, vec!["Tool", "Maynard"]);
                assert_eq!(id.as_deref(), Some("1208"));
            }
            _ => panic!("expected video command"),
        }
    }

    #[test]
    fn test_parse_global_api_key() {
        let cli =
            Cli::try_parse_from(["video-minder", "images", "--id", "5", "--api-key", "k"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_download_requires_output() {
        assert!(Cli::try_parse_from(["video-minder", "download", "https://x/o.jpg"]).is_err());
    }
}
