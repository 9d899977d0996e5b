//! Catalog search commands.

use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::lookup::{
    ArtistInfo, ArtistProvider, FilmaffinityApi, HasProviderIds, PROVIDER_NAME,
    RemoteSearchResult, VideoInfo, VideoProvider,
};

/// Search music videos by title and artists
pub fn cmd_search_videos(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    name: &str,
    artists: &[String],
) -> anyhow::Result<()> {
    let mut info = VideoInfo::new(name);
    info.artists = artists.to_vec();

    let results = rt.block_on(VideoProvider::new(api).search_video_results(&info, cancel))?;
    print_results(&results);
    Ok(())
}

/// Search artists by name
pub fn cmd_search_artists(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    name: &str,
) -> anyhow::Result<()> {
    let info = ArtistInfo::new(name);

    let results = rt.block_on(ArtistProvider::new(api).search_artist_results(&info, cancel))?;
    print_results(&results);
    Ok(())
}

fn print_results(results: &[RemoteSearchResult]) {
    if results.is_empty() {
        println!("No matches found.");
        return;
    }

    println!("Found {} match(es):", results.len());
    println!();
    for result in results {
        let id = result.provider_id(PROVIDER_NAME).unwrap_or("-");
        let name = result.name.as_deref().unwrap_or("(untitled)");
        match result.production_year {
            Some(year) => println!("  [{}] {} ({})", id, name, year),
            None => println!("  [{}] {}", id, name),
        }
        if !result.artists.is_empty() {
            println!("        by {}", result.artists.join(", "));
        }
        if let Some(url) = &result.image_url {
            println!("        image: {}", url);
        }
    }
}
