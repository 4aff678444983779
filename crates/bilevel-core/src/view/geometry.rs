use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DISPLAY_MARGIN, DEFAULT_DISPLAY_MAX_UPSCALE, DEFAULT_SELECTION_MARGIN,
    DEFAULT_SELECTION_MAX_UPSCALE, EPSILON, MIN_VIEW_SCALE,
};

/// How a buffer is fitted into a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    /// Total padding (in view pixels) subtracted from each viewport axis.
    pub margin: u32,
    /// Largest allowed magnification; 1.0 means shrink-only.
    pub max_upscale: f64,
}

impl ViewParams {
    /// Stage display panels: shrink only.
    pub fn display() -> Self {
        Self {
            margin: DEFAULT_DISPLAY_MARGIN,
            max_upscale: DEFAULT_DISPLAY_MAX_UPSCALE,
        }
    }

    /// Interactive crop selection view: may magnify small images.
    pub fn selection() -> Self {
        Self {
            margin: DEFAULT_SELECTION_MARGIN,
            max_upscale: DEFAULT_SELECTION_MAX_UPSCALE,
        }
    }
}

/// Placement of a scaled, centered buffer inside a viewport.
///
/// Derived on every render request; nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    pub scale: f64,
    pub offset_x: i32,
    pub offset_y: i32,
    pub viewport_w: u32,
    pub viewport_h: u32,
    pub buffer_w: u32,
    pub buffer_h: u32,
}

impl ViewGeometry {
    /// Width of the drawn image in view pixels.
    pub fn display_width(&self) -> u32 {
        scaled_len(self.buffer_w, self.scale)
    }

    /// Height of the drawn image in view pixels.
    pub fn display_height(&self) -> u32 {
        scaled_len(self.buffer_h, self.scale)
    }

    /// Whether a view point lies on the drawn image (edges included).
    pub fn contains(&self, view_x: f64, view_y: f64) -> bool {
        let (left, top, right, bottom) = self.image_bounds();
        view_x >= left && view_x <= right && view_y >= top && view_y <= bottom
    }

    /// Pull a view point onto the drawn image.
    pub fn clamp_to_image(&self, view_x: f64, view_y: f64) -> (f64, f64) {
        let (left, top, right, bottom) = self.image_bounds();
        (view_x.clamp(left, right), view_y.clamp(top, bottom))
    }

    /// `(left, top, right, bottom)` of the image in view space.
    ///
    /// The right and bottom edges are the unrounded `buffer * scale` extent,
    /// so a point clamped onto them maps back to the last buffer column/row.
    pub fn image_bounds(&self) -> (f64, f64, f64, f64) {
        let left = self.offset_x as f64;
        let top = self.offset_y as f64;
        (
            left,
            top,
            left + self.buffer_w as f64 * self.scale,
            top + self.buffer_h as f64 * self.scale,
        )
    }
}

fn scaled_len(len: u32, scale: f64) -> u32 {
    ((len as f64 * scale + EPSILON).floor() as u32).max(1)
}

/// Fit a `buffer_w x buffer_h` image into a `viewport_w x viewport_h` viewport.
///
/// `scale = min((viewport_w - margin) / buffer_w, (viewport_h - margin) / buffer_h, max_upscale)`,
/// floored at a small positive epsilon when the viewport is smaller than the
/// margin. The drawn image is centered; offsets use floor division.
pub fn compute_geometry(
    buffer_w: u32,
    buffer_h: u32,
    viewport_w: u32,
    viewport_h: u32,
    params: &ViewParams,
) -> ViewGeometry {
    let bw = buffer_w.max(1);
    let bh = buffer_h.max(1);
    let margin = params.margin as f64;

    let scale_x = (viewport_w as f64 - margin) / bw as f64;
    let scale_y = (viewport_h as f64 - margin) / bh as f64;
    let scale = scale_x
        .min(scale_y)
        .min(params.max_upscale)
        .max(MIN_VIEW_SCALE);

    let offset_x = centered_offset(viewport_w, scaled_len(bw, scale));
    let offset_y = centered_offset(viewport_h, scaled_len(bh, scale));

    ViewGeometry {
        scale,
        offset_x,
        offset_y,
        viewport_w,
        viewport_h,
        buffer_w: bw,
        buffer_h: bh,
    }
}

fn centered_offset(viewport: u32, displayed: u32) -> i32 {
    (viewport as i64 - displayed as i64).div_euclid(2) as i32
}

/// Map a view point to buffer coordinates, clamped into `[0, buffer_w] x [0, buffer_h]`.
pub fn view_to_buffer(geometry: &ViewGeometry, view_x: f64, view_y: f64) -> (f64, f64) {
    let bx = (view_x - geometry.offset_x as f64) / geometry.scale;
    let by = (view_y - geometry.offset_y as f64) / geometry.scale;
    (
        bx.clamp(0.0, geometry.buffer_w as f64),
        by.clamp(0.0, geometry.buffer_h as f64),
    )
}

/// Map a buffer point to view coordinates, for drawing overlays.
pub fn buffer_to_view(geometry: &ViewGeometry, buffer_x: f64, buffer_y: f64) -> (f64, f64) {
    (
        buffer_x * geometry.scale + geometry.offset_x as f64,
        buffer_y * geometry.scale + geometry.offset_y as f64,
    )
}
