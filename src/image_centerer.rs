use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use sticker_fetcher_lib::{center_and_save, CANVAS_SIZE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Center a local image on the white sticker canvas", long_about = None)]
struct Args {
    /// Image to center
    #[arg(long)]
    input: PathBuf,

    /// Where to write the result; the format follows the extension
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let img = image::open(&args.input)
        .with_context(|| format!("Failed to open image {}", args.input.display()))?;

    info!("Image size: {}x{}", img.width(), img.height());

    center_and_save(&img, &args.output)?;

    info!("Centered on {}x{} canvas: {}", CANVAS_SIZE, CANVAS_SIZE, args.output.display());

    Ok(())
}
