use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::{Channels, PixelBuffer};
use crate::consts::{BLACK, DEFAULT_THRESHOLD, WHITE};
use crate::error::{BilevelError, Result};

/// Global binarization cutoff in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Threshold(u8);

impl Threshold {
    /// Validate a user-supplied threshold.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| BilevelError::ThresholdOutOfRange(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Threshold> for u8 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl TryFrom<i64> for Threshold {
    type Error = BilevelError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed global-threshold binarization.
///
/// Samples strictly greater than `threshold` become white (255), all others
/// black (0), so a sample equal to the threshold is black. Requires a
/// single-channel buffer.
pub fn binarize(gray: &PixelBuffer, threshold: Threshold) -> Result<PixelBuffer> {
    if gray.channels() != Channels::Gray {
        return Err(BilevelError::InvalidInput(format!(
            "binarization needs a single-channel buffer, got {}",
            gray.channels()
        )));
    }

    let cutoff = threshold.value();
    gray.map_rows(Channels::Gray, |src, dst| {
        for (&s, out) in src.iter().zip(dst.iter_mut()) {
            *out = if s > cutoff { WHITE } else { BLACK };
        }
    })
}
