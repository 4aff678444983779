use thiserror::Error;

use crate::pipeline::{Action, Stage};

#[derive(Error, Debug)]
pub enum BilevelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Cannot {action} while the pipeline is at stage {stage}")]
    InvalidTransition { stage: Stage, action: Action },

    #[error("Threshold {0} out of range (expected 0..=255)")]
    ThresholdOutOfRange(i64),

    #[error("Invalid crop region: {0}")]
    InvalidRegion(String),

    #[error("Crop region {width}x{height} is too small (minimum {min}x{min})")]
    RegionTooSmall { width: u32, height: u32, min: u32 },

    #[error("No imported image to restore")]
    NoBackup,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BilevelError>;
