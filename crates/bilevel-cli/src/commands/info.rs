use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::io::image_io::load_image;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", buffer.width(), buffer.height());
    println!("Channels:    {} ({})", buffer.channels().count(), buffer.channels());
    println!("Pixels:      {}", buffer.pixel_count());

    Ok(())
}
