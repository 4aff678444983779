use std::path::PathBuf;

use anyhow::{Context, Result};
use bilevel_core::io::image_io::load_image;
use bilevel_core::pipeline::PipelineState;
use clap::Args;

use super::config::load_session_config;
use crate::summary::print_stats_summary;

#[derive(Args)]
pub struct StatsArgs {
    /// Input image file
    pub file: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Binarization threshold (0-255); overrides the config
    #[arg(short, long)]
    pub threshold: Option<i64>,
}

pub fn run(args: &StatsArgs) -> Result<()> {
    let config = load_session_config(args.config.as_deref())?;
    let mut pipeline = PipelineState::new(config.threshold);

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    pipeline.import_image(image)?;
    pipeline.advance_to_grayscale()?;

    let threshold = match args.threshold {
        Some(t) => t,
        None => pipeline.threshold().value().into(),
    };
    pipeline.advance_to_binary(threshold)?;

    let stats = pipeline.statistics()?;
    print_stats_summary(&stats, pipeline.threshold());
    Ok(())
}
