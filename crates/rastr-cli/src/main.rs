//! rastr - parallel raster transform pipeline
//!
//! Decodes one source image, runs each transform against a fresh copy
//! of the decoded pixels, and writes one PNG per transform.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rastr_io::ImageBuffer;
use rastr_ops::{blur, grayscale, invert, race, rotate};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "rastr")]
#[command(author, version, about = "Parallel raster transform pipeline")]
#[command(long_about = "
Decodes one source image (JPEG or PNG), applies each transform to a
fresh copy of the decoded pixels, and writes one PNG per transform:

  output_grayscale.png   luma conversion
  output_blur.png        3x3 box blur (border pixels pass through)
  output_rotate_90.png   90-degree clockwise rotation
  output_invert.png      color inversion

With --race it also runs the intentionally unsynchronized grayscale
variant and writes output_race_condition.png. That output is not
well-defined; the flag exists to make the hazard observable.
")]
struct Cli {
    /// Input image (JPEG or PNG, 3-channel RGB)
    #[arg(default_value = "Image.JPG")]
    input: PathBuf,

    /// Directory for the per-transform outputs
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Also run the unsynchronized grayscale hazard demonstration
    #[arg(long)]
    race: bool,

    /// Worker count for the hazard demonstration
    #[arg(long, default_value = "4")]
    race_threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let image = rastr_io::read(&cli.input)
        .with_context(|| format!("Failed to load: {}", cli.input.display()))?;

    if image.channels != 3 {
        bail!(
            "unsupported channel count {} in {}: the transforms expect a 3-channel RGB image",
            image.channels,
            cli.input.display()
        );
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let channels = image.channels as usize;
    info!(width, height, "loaded {}", cli.input.display());

    // Each transform runs against a fresh copy of the decoded pixels.
    let mut work = image.data.clone();
    grayscale::grayscale(&mut work, width, height, channels)?;
    save(&cli.output_dir, "output_grayscale.png", width, height, channels, work)?;

    let mut blurred = vec![0u8; image.data.len()];
    blur::box_blur_3x3(&image.data, &mut blurred, width, height, channels)?;
    save(&cli.output_dir, "output_blur.png", width, height, channels, blurred)?;

    let mut work = image.data.clone();
    rotate::rotate_90_cw(&mut work, width, height, channels)?;
    // rotation swaps the dimensions
    save(&cli.output_dir, "output_rotate_90.png", height, width, channels, work)?;

    let mut work = image.data.clone();
    invert::invert(&mut work, width, height, channels)?;
    save(&cli.output_dir, "output_invert.png", width, height, channels, work)?;

    if cli.race {
        let mut work = image.data.clone();
        race::grayscale_racy(&mut work, width, height, channels, cli.race_threads)?;
        save(&cli.output_dir, "output_race_condition.png", width, height, channels, work)?;
    }

    Ok(())
}

/// Wraps transformed pixels back into a container and writes them out.
fn save(
    dir: &Path,
    name: &str,
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
) -> Result<()> {
    let path = dir.join(name);
    let out = ImageBuffer::from_u8(width as u32, height as u32, channels as u8, data)
        .with_context(|| format!("Invalid output buffer for {}", path.display()))?;
    rastr_io::write(&path, &out).with_context(|| format!("Failed to save: {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
