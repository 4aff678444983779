use std::collections::BTreeMap;
use std::fmt;

use crate::buffer::{Channels, PixelBuffer};
use crate::consts::{BLACK, WHITE};
use crate::error::{BilevelError, Result};

/// Black/white pixel counts of a binarized image.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelStatistics {
    pub total_pixels: u64,
    /// Occurrences of each sample value present in the image.
    pub count_by_value: BTreeMap<u8, u64>,
    pub black_count: u64,
    pub white_count: u64,
    /// `white / black`, `None` when either count is zero.
    pub ratio: Option<f64>,
}

impl PixelStatistics {
    /// Share of black pixels, in percent.
    pub fn black_percentage(&self) -> f64 {
        percentage(self.black_count, self.total_pixels)
    }

    /// Share of white pixels, in percent.
    pub fn white_percentage(&self) -> f64 {
        percentage(self.white_count, self.total_pixels)
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

impl fmt::Display for PixelStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {}, black {} ({:.1}%), white {} ({:.1}%), white:black = ",
            self.total_pixels,
            self.black_count,
            self.black_percentage(),
            self.white_count,
            self.white_percentage()
        )?;
        match self.ratio {
            Some(r) => write!(f, "{r:.2}:1"),
            None => write!(f, "N/A"),
        }
    }
}

/// Count black and white pixels of a binarized buffer in one pass.
///
/// Rejects multi-channel buffers and any sample other than 0 or 255 with
/// [`BilevelError::InvalidInput`].
pub fn compute_stats(buffer: &PixelBuffer) -> Result<PixelStatistics> {
    if buffer.channels() != Channels::Gray {
        return Err(BilevelError::InvalidInput(format!(
            "statistics need a binarized single-channel buffer, got {}",
            buffer.channels()
        )));
    }

    let mut black_count = 0u64;
    let mut white_count = 0u64;
    for (index, &value) in buffer.samples().iter().enumerate() {
        match value {
            BLACK => black_count += 1,
            WHITE => white_count += 1,
            other => {
                let w = buffer.width() as usize;
                return Err(BilevelError::InvalidInput(format!(
                    "sample {other} at ({}, {}) is not binary",
                    index % w,
                    index / w
                )));
            }
        }
    }

    let mut count_by_value = BTreeMap::new();
    if black_count > 0 {
        count_by_value.insert(BLACK, black_count);
    }
    if white_count > 0 {
        count_by_value.insert(WHITE, white_count);
    }

    let ratio = if black_count > 0 && white_count > 0 {
        Some(white_count as f64 / black_count as f64)
    } else {
        None
    };

    Ok(PixelStatistics {
        total_pixels: buffer.pixel_count(),
        count_by_value,
        black_count,
        white_count,
        ratio,
    })
}
