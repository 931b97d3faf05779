//! Convert ASCII art pasted on standard input into a bitmap.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bmpgen::source::{AsciiArt, AsciiArtOptions, DEFAULT_SCALE_FACTOR};
use bmpgen::{EncodeRequest, Limits, Unstoppable};
use clap::Parser;
use tracing::info;

/// Read text art from stdin until end of input and render it as a bitmap.
#[derive(Parser)]
#[command(name = "bmp-ascii", version)]
struct Args {
    /// Pixels per character along each axis.
    #[arg(short, long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: u32,
    /// Output directory for image.bmp and data/.
    #[arg(short, long, default_value = "ascii")]
    out: PathBuf,
    /// Refuse art whose bitmap would have more pixels than this.
    #[arg(long)]
    max_pixels: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("*Press Ctrl + D to finish*");
        eprintln!("\nPaste your ASCII art below (dont type anything, just paste):");
    }
    let mut raw = Vec::new();
    stdin
        .read_to_end(&mut raw)
        .context("failed to read ASCII art from stdin")?;
    // invalid UTF-8 becomes U+FFFD, which renders as ink
    let text = String::from_utf8_lossy(&raw);

    let options = AsciiArtOptions {
        scale_factor: args.scale,
        ..Default::default()
    };
    let mut art = AsciiArt::with_options(&text, options).context("invalid ASCII art input")?;

    info!("Processing ASCII art...");
    eprintln!("{text}");

    let limits = Limits {
        max_pixels: args.max_pixels,
        ..Default::default()
    };
    let dims = art.dimensions_within(&limits)?;
    let image = EncodeRequest::new()
        .with_limits(&limits)
        .encode(dims, &mut art, Unstoppable)
        .context("failed to encode bitmap")?;
    let saved = bmpgen::save(&image, &args.out)
        .with_context(|| format!("failed to save into {}", args.out.display()))?;

    info!("Image created in {}", saved.image.display());
    Ok(())
}
