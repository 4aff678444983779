use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::crop::CropRect;
use bilevel_core::io::image_io::{load_image, save_image};
use bilevel_core::pipeline::PipelineState;
use clap::Args;

use super::config::load_session_config;
use crate::summary::{print_run_summary, print_stats_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Input image file
    pub file: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Binarization threshold (0-255); overrides the config
    #[arg(short, long)]
    pub threshold: Option<i64>,

    /// Crop before processing, in image pixels: "x1,y1,x2,y2"
    #[arg(long)]
    pub crop: Option<CropRect>,

    /// Also save the grayscale stage to this path
    #[arg(long)]
    pub gray_output: Option<PathBuf>,

    /// Print black/white pixel statistics
    #[arg(long)]
    pub stats: bool,

    /// Output file path
    #[arg(short, long, default_value = "binary.png")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = load_session_config(args.config.as_deref())?;
    let mut pipeline = PipelineState::new(config.threshold);
    if let Some(t) = args.threshold {
        pipeline.set_threshold(t)?;
    }

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    pipeline.import_image(image)?;

    if let Some(ref rect) = args.crop {
        pipeline.apply_crop(rect).context("Crop failed")?;
    }

    pipeline.advance_to_grayscale()?;
    if let (Some(path), Some(gray)) = (&args.gray_output, pipeline.grayscale()) {
        save_image(gray, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    let threshold = pipeline.threshold();
    pipeline.advance_to_binary(threshold.value().into())?;

    let binary = pipeline
        .binary()
        .context("Binarization produced no image")?;
    save_image(binary, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    print_run_summary(&args.file, &args.output, &pipeline, args.crop.as_ref());

    if args.stats {
        let stats = pipeline.statistics()?;
        print_stats_summary(&stats, pipeline.threshold());
    }

    Ok(())
}
