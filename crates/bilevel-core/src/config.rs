use serde::{Deserialize, Serialize};

use crate::binarize::Threshold;
use crate::consts::DEFAULT_MIN_CROP_SIZE;
use crate::error::{BilevelError, Result};
use crate::view::ViewParams;

/// Settings for an interactive binarization session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial binarization threshold (0-255).
    #[serde(default)]
    pub threshold: Threshold,
    /// Smallest accepted crop side in pixels.
    #[serde(default = "default_min_crop_size")]
    pub min_crop_size: u32,
    /// Fitting of the stage display panels.
    #[serde(default = "ViewParams::display")]
    pub display: ViewParams,
    /// Fitting of the crop selection view.
    #[serde(default = "ViewParams::selection")]
    pub selection: ViewParams,
}

fn default_min_crop_size() -> u32 {
    DEFAULT_MIN_CROP_SIZE
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            min_crop_size: DEFAULT_MIN_CROP_SIZE,
            display: ViewParams::display(),
            selection: ViewParams::selection(),
        }
    }
}

impl SessionConfig {
    /// Reject settings the view and crop math cannot work with.
    pub fn validate(&self) -> Result<()> {
        for (name, params) in [("display", &self.display), ("selection", &self.selection)] {
            if !params.max_upscale.is_finite() || params.max_upscale <= 0.0 {
                return Err(BilevelError::InvalidConfig(format!(
                    "{name}.max_upscale must be a positive number, got {}",
                    params.max_upscale
                )));
            }
        }
        if self.min_crop_size == 0 {
            return Err(BilevelError::InvalidConfig(
                "min_crop_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
