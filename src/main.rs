//! Video Minder - look up music videos and artists from the command line.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use video_minder::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("video_minder=info".parse()?))
        .init();

    cli::run_command(&args)
}
