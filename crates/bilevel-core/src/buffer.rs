use std::fmt;

use ndarray::{s, Array3, ArrayView3};
use rayon::prelude::*;

use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::crop::CropRect;
use crate::error::{BilevelError, Result};

/// Channel layout of a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single luminance channel.
    Gray,
    /// Interleaved red, green, blue.
    Rgb,
}

impl Channels {
    /// Map a declared channel count to a layout.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Self::Gray),
            COLOR_CHANNEL_COUNT => Ok(Self::Rgb),
            n => Err(BilevelError::Decode(format!(
                "unsupported channel count {n} (expected 1 or 3)"
            ))),
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => COLOR_CHANNEL_COUNT,
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray => write!(f, "gray"),
            Self::Rgb => write!(f, "{} channels", COLOR_CHANNEL_COUNT),
        }
    }
}

/// An 8-bit image, immutable once constructed.
///
/// Samples are stored row-major with channels interleaved, shape
/// `(height, width, channels)`. Every transformation produces a new buffer,
/// so pipeline stages can hold their buffers independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
    channels: Channels,
}

impl PixelBuffer {
    /// Build a buffer from decoded samples.
    ///
    /// Fails with [`BilevelError::Decode`] when the channel count is not 1 or 3,
    /// a dimension is zero, or `samples.len() != width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> Result<Self> {
        let channels = Channels::from_count(channels)?;
        if width == 0 || height == 0 {
            return Err(BilevelError::Decode(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        let expected = width as usize * height as usize * channels.count();
        if samples.len() != expected {
            return Err(BilevelError::Decode(format!(
                "{} samples do not match {width}x{height} with {} channel(s) (expected {expected})",
                samples.len(),
                channels.count()
            )));
        }

        Self::from_parts(width, height, channels, samples)
    }

    /// Build a buffer from samples whose count callers have already checked.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        channels: Channels,
        samples: Vec<u8>,
    ) -> Result<Self> {
        let shape = (height as usize, width as usize, channels.count());
        let data = Array3::from_shape_vec(shape, samples).map_err(|e| {
            BilevelError::Decode(format!("cannot shape samples as {width}x{height}: {e}"))
        })?;
        Ok(Self { data, channels })
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Number of pixels (not samples).
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Number of samples in one row.
    pub fn row_len(&self) -> usize {
        self.width() as usize * self.channels.count()
    }

    /// Raw samples in row-major, channel-interleaved order.
    pub fn samples(&self) -> &[u8] {
        // Buffers are only ever built through `from_parts`, which yields
        // standard layout.
        self.data.as_slice().unwrap_or(&[])
    }

    /// The samples of pixel `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.channels.count();
        let start = (y as usize * self.width() as usize + x as usize) * c;
        self.samples().get(start..start + c)
    }

    /// Read-only `(height, width, channels)` view of the samples.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Cut out `rect` as a new buffer.
    ///
    /// Fails with [`BilevelError::InvalidRegion`] when the rectangle is empty
    /// or reaches past the buffer edges.
    pub fn crop(&self, rect: &CropRect) -> Result<PixelBuffer> {
        let rect = rect.validated(self.width(), self.height())?;
        let region = self.data.slice(s![
            rect.y1 as usize..rect.y2 as usize,
            rect.x1 as usize..rect.x2 as usize,
            ..
        ]);
        let samples: Vec<u8> = region.iter().copied().collect();
        Self::from_parts(rect.width(), rect.height(), self.channels, samples)
    }

    /// Build a new buffer of the same size by transforming each row.
    ///
    /// `row_fn` receives a source row and the zeroed destination row of
    /// `width * out_channels` samples. Rows are processed in parallel once
    /// the image reaches `PARALLEL_PIXEL_THRESHOLD` pixels.
    pub(crate) fn map_rows<F>(&self, out_channels: Channels, row_fn: F) -> Result<PixelBuffer>
    where
        F: Fn(&[u8], &mut [u8]) + Sync + Send,
    {
        let (w, h) = (self.width() as usize, self.height() as usize);
        let in_row = self.row_len();
        let out_row = w * out_channels.count();
        let mut out = vec![0u8; h * out_row];

        if w * h >= PARALLEL_PIXEL_THRESHOLD {
            out.par_chunks_mut(out_row)
                .zip(self.samples().par_chunks(in_row))
                .for_each(|(dst, src)| row_fn(src, dst));
        } else {
            for (dst, src) in out.chunks_mut(out_row).zip(self.samples().chunks(in_row)) {
                row_fn(src, dst);
            }
        }

        Self::from_parts(self.width(), self.height(), out_channels, out)
    }
}

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} ({})", self.width(), self.height(), self.channels)
    }
}
