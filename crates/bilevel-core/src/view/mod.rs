mod geometry;
mod present;

pub use geometry::{buffer_to_view, compute_geometry, view_to_buffer, ViewGeometry, ViewParams};
pub use present::present;
