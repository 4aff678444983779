use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{BilevelError, Result};
use crate::view::{view_to_buffer, ViewGeometry};

/// An axis-aligned crop region in buffer coordinates, `[x1, x2) x [y1, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Check the rect is non-empty and lies within a `src_w x src_h` buffer.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.x2 <= self.x1 || self.y2 <= self.y1 {
            return Err(BilevelError::InvalidRegion(format!(
                "crop {self} is empty"
            )));
        }

        if self.x2 > src_w || self.y2 > src_h {
            return Err(BilevelError::InvalidRegion(format!(
                "crop {self} exceeds source dimensions ({src_w}x{src_h})"
            )));
        }

        Ok(*self)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{}) {}x{}",
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            self.width(),
            self.height()
        )
    }
}

/// Parses `"x1,y1,x2,y2"`.
impl FromStr for CropRect {
    type Err = BilevelError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<u32> = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| BilevelError::InvalidRegion(format!("cannot parse '{s}': {e}")))?;
        match parts[..] {
            [x1, y1, x2, y2] => Ok(Self::new(x1, y1, x2, y2)),
            _ => Err(BilevelError::InvalidRegion(format!(
                "expected x1,y1,x2,y2 but got '{s}'"
            ))),
        }
    }
}

/// Turn a drag gesture in view space into a buffer-space crop rectangle.
///
/// Endpoints are interchangeable. Coordinates are rounded to the nearest
/// pixel and clamped to the buffer; a result narrower or shorter than
/// `min_size` (never less than one pixel) is rejected with
/// [`BilevelError::RegionTooSmall`].
pub fn plan_crop(
    geometry: &ViewGeometry,
    start_view: (f64, f64),
    end_view: (f64, f64),
    min_size: u32,
) -> Result<CropRect> {
    let (sx, sy) = view_to_buffer(geometry, start_view.0, start_view.1);
    let (ex, ey) = view_to_buffer(geometry, end_view.0, end_view.1);

    let to_pixel = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as u32;
    let rect = CropRect {
        x1: to_pixel(sx.min(ex), geometry.buffer_w),
        y1: to_pixel(sy.min(ey), geometry.buffer_h),
        x2: to_pixel(sx.max(ex), geometry.buffer_w),
        y2: to_pixel(sy.max(ey), geometry.buffer_h),
    };

    let min_size = min_size.max(1);
    if rect.width() < min_size || rect.height() < min_size {
        return Err(BilevelError::RegionTooSmall {
            width: rect.width(),
            height: rect.height(),
            min: min_size,
        });
    }

    debug!(%rect, scale = geometry.scale, "Planned crop");
    Ok(rect)
}

/// Rectangle in view coordinates, normalized so `left <= right`, `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ViewRect {
    fn spanning(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            left: a.0.min(b.0),
            top: a.1.min(b.1),
            right: a.0.max(b.0),
            bottom: a.1.max(b.1),
        }
    }
}

/// An in-progress drag selection on the crop view.
///
/// Updates only move the overlay; nothing is committed until [`confirm`]
/// hands back a rectangle for `PipelineState::apply_crop`.
///
/// [`confirm`]: CropSelection::confirm
#[derive(Clone, Debug, Default)]
pub struct CropSelection {
    start: Option<(f64, f64)>,
    current: Option<(f64, f64)>,
}

impl CropSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag. Presses outside the drawn image are ignored and leave
    /// any previous selection in place.
    pub fn begin(&mut self, geometry: &ViewGeometry, point: (f64, f64)) -> bool {
        if !geometry.contains(point.0, point.1) {
            return false;
        }
        self.start = Some(point);
        self.current = None;
        true
    }

    /// Move the free corner, clamped onto the drawn image. Returns the
    /// overlay to draw, or `None` when no drag has started.
    pub fn update(&mut self, geometry: &ViewGeometry, point: (f64, f64)) -> Option<ViewRect> {
        self.start?;
        self.current = Some(geometry.clamp_to_image(point.0, point.1));
        self.overlay()
    }

    /// Current overlay rectangle in view space.
    pub fn overlay(&self) -> Option<ViewRect> {
        Some(ViewRect::spanning(self.start?, self.current?))
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Resolve the selection into a buffer-space rectangle.
    pub fn confirm(&self, geometry: &ViewGeometry, min_size: u32) -> Result<CropRect> {
        match (self.start, self.current) {
            (Some(start), Some(end)) => plan_crop(geometry, start, end, min_size),
            _ => Err(BilevelError::InvalidRegion("no crop area selected".into())),
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_rect_spanning_normalizes() {
        let r = ViewRect::spanning((30.0, 5.0), (10.0, 25.0));
        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, 5.0);
        assert_eq!(r.right, 30.0);
        assert_eq!(r.bottom, 25.0);
    }

    #[test]
    fn test_parse_crop_rect() {
        let rect: CropRect = "1, 2,30,40".parse().unwrap();
        assert_eq!(rect, CropRect::new(1, 2, 30, 40));
        assert!("1,2,3".parse::<CropRect>().is_err());
        assert!("a,b,c,d".parse::<CropRect>().is_err());
    }
}
