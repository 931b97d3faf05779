//! Write a bitmap of uniformly random pixels.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bmpgen::ImageDimensions;
use bmpgen::source::RandomPixelSource;
use clap::Parser;
use tracing::info;

/// Generate a bitmap filled with random colors.
#[derive(Parser)]
#[command(name = "bmp-random", version)]
struct Args {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// Output directory for image.bmp and data/.
    #[arg(short, long, default_value = "random")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let dims = ImageDimensions::new(args.width, args.height);

    let mut source = RandomPixelSource::from_thread_rng();
    let image = bmpgen::encode(dims, &mut source)
        .with_context(|| format!("failed to encode {}x{} bitmap", args.width, args.height))?;
    let saved = bmpgen::save(&image, &args.out)
        .with_context(|| format!("failed to save into {}", args.out.display()))?;

    info!("Image created in {}", saved.image.display());
    Ok(())
}
