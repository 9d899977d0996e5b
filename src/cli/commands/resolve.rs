//! Metadata resolution and image listing commands.

use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::lookup::{
    ArtistInfo, ArtistProvider, ExternalId, FilmaffinityApi, HasProviderIds, ImageProvider,
    MusicVideo, PROVIDER_NAME, PersonInfo, SLUG_KEY, VideoInfo, VideoProvider,
};

/// Resolve a music video and print its metadata
pub fn cmd_video(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    name: &str,
    artists: &[String],
    id: Option<&str>,
) -> anyhow::Result<()> {
    let mut info = VideoInfo::new(name);
    info.artists = artists.to_vec();
    if let Some(id) = id {
        info = info.with_provider_id(id);
    }

    let result = rt.block_on(VideoProvider::new(api).resolve_video_metadata(&info, cancel))?;

    let Some(video) = result.item.as_ref().filter(|_| result.has_metadata) else {
        println!("✗ No metadata found for {:?}", name);
        return Ok(());
    };

    println!("✓ Match found!");
    println!();
    if let Some(title) = &video.name {
        println!("  Title:   {}", title);
    }
    if !video.artists.is_empty() {
        println!("  Artists: {}", video.artists.join(", "));
    }
    if let Some(year) = video.production_year {
        println!("  Year:    {}", year);
    }
    for image in &video.image_infos {
        println!("  Image:   {}", image.path);
    }
    print_ids(video);
    print_people(&result.people);

    Ok(())
}

/// Resolve an artist and print its metadata
pub fn cmd_artist(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    name: &str,
    id: Option<&str>,
) -> anyhow::Result<()> {
    let mut info = ArtistInfo::new(name);
    if let Some(id) = id {
        info = info.with_provider_id(id);
    }

    let result = rt.block_on(ArtistProvider::new(api).resolve_artist_metadata(&info, cancel))?;

    let Some(artist) = result.item.as_ref().filter(|_| result.has_metadata) else {
        println!("✗ No metadata found for {:?}", name);
        return Ok(());
    };

    println!("✓ Match found!");
    println!();
    println!("  Name:    {}", artist.name);
    print_ids(artist);

    Ok(())
}

/// List remote images for a video ID
pub fn cmd_images(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    id: &str,
) -> anyhow::Result<()> {
    let mut item = MusicVideo::default();
    item.set_provider_id(PROVIDER_NAME, id);

    let images = rt.block_on(ImageProvider::new(api).images(&item, cancel))?;

    if images.is_empty() {
        println!("No images available for video {}.", id);
        return Ok(());
    }

    for image in images {
        println!("  {:?}: {}", image.kind, image.url);
    }
    Ok(())
}

fn print_ids(item: &impl HasProviderIds) {
    if let Some(id) = item.provider_id(PROVIDER_NAME) {
        println!("  ID:      {}", id);
    }
    if let Some(slug) = item.provider_id(SLUG_KEY) {
        println!("  Link:    {}", ExternalId.url(slug));
    }
}

fn print_people(people: &[PersonInfo]) {
    if people.is_empty() {
        return;
    }

    println!();
    println!("  Directors:");
    for person in people {
        match person.provider_id(SLUG_KEY) {
            Some(slug) => println!("    {} <{}>", person.name, ExternalId.url(slug)),
            None => println!("    {}", person.name),
        }
    }
}
