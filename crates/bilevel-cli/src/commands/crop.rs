use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bilevel_core::crop::CropSelection;
use bilevel_core::io::image_io::{load_image, save_image};
use bilevel_core::pipeline::PipelineState;
use bilevel_core::view::compute_geometry;
use clap::Args;
use tracing::info;

use super::config::load_session_config;

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Selection view size in pixels: "WxH"
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    pub viewport: (u32, u32),

    /// Drag start in view coordinates: "x,y"
    #[arg(long, value_parser = parse_point)]
    pub from: (f64, f64),

    /// Drag end in view coordinates: "x,y"
    #[arg(long, value_parser = parse_point)]
    pub to: (f64, f64),

    /// Save the cropped image to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let config = load_session_config(args.config.as_deref())?;
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let (vw, vh) = args.viewport;
    let geometry = compute_geometry(image.width(), image.height(), vw, vh, &config.selection);
    info!(
        scale = geometry.scale,
        offset_x = geometry.offset_x,
        offset_y = geometry.offset_y,
        "Selection view geometry"
    );
    let (left, top, right, bottom) = geometry.image_bounds();
    println!(
        "Selection view: {}x{} image drawn at ({left:.0},{top:.0})-({right:.0},{bottom:.0}), scale {:.3}",
        image.width(),
        image.height(),
        geometry.scale
    );

    let mut selection = CropSelection::new();
    if !selection.begin(&geometry, args.from) {
        bail!(
            "Drag start ({}, {}) is outside the drawn image",
            args.from.0,
            args.from.1
        );
    }
    selection.update(&geometry, args.to);
    let rect = selection.confirm(&geometry, config.min_crop_size)?;

    let mut pipeline = PipelineState::new(config.threshold);
    pipeline.import_image(image)?;
    pipeline.apply_crop(&rect)?;
    println!("Crop: {rect}");

    if let (Some(path), Some(cropped)) = (&args.output, pipeline.original()) {
        save_image(cropped, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("y: {e}"))?;
    Ok((x, y))
}
