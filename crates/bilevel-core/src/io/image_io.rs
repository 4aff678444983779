use std::path::Path;

use image::{ColorType, DynamicImage, GrayImage, ImageFormat, RgbImage};
use tracing::{debug, info};

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{BilevelError, Result};

/// Load an image file into a PixelBuffer.
///
/// Grayscale sources stay single-channel; everything else is converted to
/// 8-bit RGB (alpha is dropped).
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    let buffer = checked_buffer(img)?;
    info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels().count(),
        "Loaded image"
    );
    Ok(buffer)
}

/// Decode an in-memory encoded image (PNG, JPEG, BMP, TIFF, ...).
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    if bytes.is_empty() {
        return Err(BilevelError::Decode("empty input".into()));
    }
    let img = image::load_from_memory(bytes)?;
    checked_buffer(img)
}

fn checked_buffer(img: DynamicImage) -> Result<PixelBuffer> {
    if img.width() == 0 || img.height() == 0 {
        return Err(BilevelError::Decode(format!(
            "image has no pixels ({}x{})",
            img.width(),
            img.height()
        )));
    }
    buffer_from_image(img)
}

/// Convert a decoded image, keeping grayscale sources single-channel.
pub(crate) fn buffer_from_image(img: DynamicImage) -> Result<PixelBuffer> {
    match img.color() {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            let gray = img.into_luma8();
            let (w, h) = gray.dimensions();
            PixelBuffer::from_parts(w, h, Channels::Gray, gray.into_raw())
        }
        _ => {
            let rgb = img.into_rgb8();
            let (w, h) = rgb.dimensions();
            PixelBuffer::from_parts(w, h, Channels::Rgb, rgb.into_raw())
        }
    }
}

/// Wrap a PixelBuffer as an `image` crate image.
pub fn to_dynamic_image(buffer: &PixelBuffer) -> Result<DynamicImage> {
    let (w, h) = (buffer.width(), buffer.height());
    let samples = buffer.samples().to_vec();
    let img = match buffer.channels() {
        Channels::Gray => GrayImage::from_raw(w, h, samples).map(DynamicImage::ImageLuma8),
        Channels::Rgb => RgbImage::from_raw(w, h, samples).map(DynamicImage::ImageRgb8),
    };
    img.ok_or_else(|| {
        BilevelError::InvalidInput(format!("samples of {buffer} do not fill its dimensions"))
    })
}

/// Encoder chosen from the file extension; PNG when unknown.
pub fn output_format(path: &Path) -> ImageFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        Some("tif" | "tiff") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}

/// Save a buffer, choosing the format from the file extension.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let format = output_format(path);
    debug!(path = %path.display(), ?format, "Saving image");
    to_dynamic_image(buffer)?.save_with_format(path, format)?;
    Ok(())
}
