mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bilevel", about = "Grayscale and threshold binarization tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and channels
    Info(commands::info::InfoArgs),
    /// Convert to grayscale, binarize and save
    Run(commands::run::RunArgs),
    /// Crop an image from a drag gesture in the selection view
    Crop(commands::crop::CropArgs),
    /// Print black/white pixel statistics of the binarized image
    Stats(commands::stats::StatsArgs),
    /// Print or save the default session config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
