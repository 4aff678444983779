use tracing::{debug, info};

use crate::binarize::{binarize, Threshold};
use crate::buffer::PixelBuffer;
use crate::color::to_grayscale;
use crate::crop::CropRect;
use crate::error::{BilevelError, Result};
use crate::stats::{compute_stats, PixelStatistics};

use super::stage::{Action, Stage};

/// Buffers owned at each stage. Downstream buffers exist only while the
/// stage has reached them.
#[derive(Clone, Debug, Default)]
enum StageBuffers {
    #[default]
    Empty,
    Original {
        original: PixelBuffer,
    },
    Grayscale {
        original: PixelBuffer,
        grayscale: PixelBuffer,
    },
    Binary {
        original: PixelBuffer,
        grayscale: PixelBuffer,
        binary: PixelBuffer,
    },
}

impl StageBuffers {
    fn stage(&self) -> Stage {
        match self {
            Self::Empty => Stage::None,
            Self::Original { .. } => Stage::Original,
            Self::Grayscale { .. } => Stage::Grayscale,
            Self::Binary { .. } => Stage::Binary,
        }
    }

    fn original(&self) -> Option<&PixelBuffer> {
        match self {
            Self::Empty => None,
            Self::Original { original }
            | Self::Grayscale { original, .. }
            | Self::Binary { original, .. } => Some(original),
        }
    }

    fn grayscale(&self) -> Option<&PixelBuffer> {
        match self {
            Self::Grayscale { grayscale, .. } | Self::Binary { grayscale, .. } => Some(grayscale),
            _ => None,
        }
    }

    fn binary(&self) -> Option<&PixelBuffer> {
        match self {
            Self::Binary { binary, .. } => Some(binary),
            _ => None,
        }
    }

    fn with_grayscale(self, grayscale: PixelBuffer) -> Self {
        match self {
            Self::Original { original }
            | Self::Grayscale { original, .. }
            | Self::Binary { original, .. } => Self::Grayscale { original, grayscale },
            Self::Empty => Self::Empty,
        }
    }

    fn with_binary(self, binary: PixelBuffer) -> Self {
        match self {
            Self::Grayscale { original, grayscale } | Self::Binary { original, grayscale, .. } => {
                Self::Binary {
                    original,
                    grayscale,
                    binary,
                }
            }
            other => other,
        }
    }
}

/// The image pipeline: original -> grayscale -> binary.
///
/// Every mutator either completes its transition or returns an error and
/// leaves the state untouched. Mutators take `&mut self`; a front end that
/// shares the pipeline across threads wraps it in a `Mutex`.
#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    buffers: StageBuffers,
    backup: Option<PixelBuffer>,
    threshold: Threshold,
}

impl PipelineState {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> Stage {
        self.buffers.stage()
    }

    /// Threshold used for the next (or current) binarization.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.buffers.original()
    }

    pub fn grayscale(&self) -> Option<&PixelBuffer> {
        self.buffers.grayscale()
    }

    pub fn binary(&self) -> Option<&PixelBuffer> {
        self.buffers.binary()
    }

    /// Buffer of the furthest stage reached.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.binary()
            .or_else(|| self.grayscale())
            .or_else(|| self.original())
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    pub fn allows(&self, action: Action) -> bool {
        self.stage().allows(action)
    }

    fn refuse(&self, action: Action) -> BilevelError {
        BilevelError::InvalidTransition {
            stage: self.stage(),
            action,
        }
    }

    /// Make `buffer` the new original and restore point. Valid in any stage.
    pub fn import_image(&mut self, buffer: PixelBuffer) -> Result<Stage> {
        info!(
            width = buffer.width(),
            height = buffer.height(),
            channels = buffer.channels().count(),
            "Imported image"
        );
        self.backup = Some(buffer.clone());
        self.buffers = StageBuffers::Original { original: buffer };
        Ok(self.stage())
    }

    /// Import decoded samples; fails with `Decode` when they do not match
    /// the declared shape.
    pub fn import_raw(
        &mut self,
        width: u32,
        height: u32,
        channels: usize,
        samples: Vec<u8>,
    ) -> Result<Stage> {
        let buffer = PixelBuffer::from_raw(width, height, channels, samples)?;
        self.import_image(buffer)
    }

    /// Original -> Grayscale.
    pub fn advance_to_grayscale(&mut self) -> Result<Stage> {
        let grayscale = match &self.buffers {
            StageBuffers::Original { original } => to_grayscale(original)?,
            _ => return Err(self.refuse(Action::ConvertGrayscale)),
        };
        self.buffers = std::mem::take(&mut self.buffers).with_grayscale(grayscale);
        info!("Converted to grayscale");
        Ok(self.stage())
    }

    /// Grayscale/Binary -> Binary at `threshold`.
    ///
    /// Re-entrant from Binary so the threshold can be changed in place.
    pub fn advance_to_binary(&mut self, threshold: i64) -> Result<Stage> {
        if !matches!(self.stage(), Stage::Grayscale | Stage::Binary) {
            return Err(self.refuse(Action::Binarize));
        }
        let threshold = Threshold::new(threshold)?;
        self.rebinarize(threshold)
    }

    fn rebinarize(&mut self, threshold: Threshold) -> Result<Stage> {
        let grayscale = self
            .buffers
            .grayscale()
            .ok_or_else(|| self.refuse(Action::Binarize))?;
        let binary = binarize(grayscale, threshold)?;
        self.threshold = threshold;
        self.buffers = std::mem::take(&mut self.buffers).with_binary(binary);
        debug!(%threshold, "Binarized");
        Ok(self.stage())
    }

    /// Change the threshold. Recomputes immediately in Binary, otherwise the
    /// value is kept for the next binarization.
    pub fn set_threshold(&mut self, threshold: i64) -> Result<Stage> {
        let threshold = Threshold::new(threshold)?;
        if self.stage() == Stage::Binary {
            return self.rebinarize(threshold);
        }
        self.threshold = threshold;
        debug!(%threshold, "Threshold stored");
        Ok(self.stage())
    }

    /// Crop the current original and reset to Original. The restore point
    /// is kept.
    pub fn apply_crop(&mut self, rect: &CropRect) -> Result<Stage> {
        let original = self
            .buffers
            .original()
            .ok_or_else(|| self.refuse(Action::Crop))?;
        let cropped = original.crop(rect)?;
        info!(%rect, "Cropped image");
        self.buffers = StageBuffers::Original { original: cropped };
        Ok(self.stage())
    }

    /// Go back to the last imported image.
    pub fn restore_original(&mut self) -> Result<Stage> {
        let backup = self.backup.as_ref().ok_or(BilevelError::NoBackup)?;
        self.buffers = StageBuffers::Original {
            original: backup.clone(),
        };
        info!("Restored original image");
        Ok(self.stage())
    }

    /// Black/white statistics of the binary buffer.
    pub fn statistics(&self) -> Result<PixelStatistics> {
        let binary = self.binary().ok_or_else(|| self.refuse(Action::Statistics))?;
        compute_stats(binary)
    }
}
