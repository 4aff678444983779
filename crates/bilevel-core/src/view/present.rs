use image::imageops::FilterType;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::io::image_io::{buffer_from_image, to_dynamic_image};

use super::geometry::ViewGeometry;

/// Resample `buffer` to the size it is drawn at in `geometry`.
///
/// Shrinking uses an area-style triangle filter, magnifying (selection view
/// only) uses Catmull-Rom. The result is what a renderer blits at
/// `(offset_x, offset_y)`.
pub fn present(buffer: &PixelBuffer, geometry: &ViewGeometry) -> Result<PixelBuffer> {
    let (w, h) = (geometry.display_width(), geometry.display_height());
    if w == buffer.width() && h == buffer.height() {
        return Ok(buffer.clone());
    }

    let filter = if geometry.scale > 1.0 {
        FilterType::CatmullRom
    } else {
        FilterType::Triangle
    };
    debug!(
        from_w = buffer.width(),
        from_h = buffer.height(),
        to_w = w,
        to_h = h,
        ?filter,
        "Resampling for display"
    );

    let resized = to_dynamic_image(buffer)?.resize_exact(w, h, filter);
    buffer_from_image(resized)
}
