/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color buffer (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Fixed-point precision of the luminance weights (14 bits).
pub const LUMINANCE_SHIFT: u32 = 14;

/// ITU-R BT.601 red weight, 0.299 scaled by 2^14 and rounded.
pub const LUMINANCE_R: u32 = 4899;

/// ITU-R BT.601 green weight, 0.587 scaled by 2^14 and rounded.
pub const LUMINANCE_G: u32 = 9617;

/// ITU-R BT.601 blue weight, 0.114 scaled by 2^14 and rounded.
pub const LUMINANCE_B: u32 = 1868;

/// Sample value written for pixels above the threshold.
pub const WHITE: u8 = 255;

/// Sample value written for pixels at or below the threshold.
pub const BLACK: u8 = 0;

/// Threshold used until the user picks one.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Padding (in view pixels) kept around the image in the stage display panels.
pub const DEFAULT_DISPLAY_MARGIN: u32 = 20;

/// Display panels only ever shrink an image.
pub const DEFAULT_DISPLAY_MAX_UPSCALE: f64 = 1.0;

/// Padding (in view pixels) kept around the image in the crop selection view.
pub const DEFAULT_SELECTION_MARGIN: u32 = 40;

/// The crop selection view may magnify small images for precise selection.
pub const DEFAULT_SELECTION_MAX_UPSCALE: f64 = 2.0;

/// Smallest accepted crop side, in buffer pixels.
pub const DEFAULT_MIN_CROP_SIZE: u32 = 10;

/// Lower bound for the view scale when the viewport is smaller than its margin.
pub const MIN_VIEW_SCALE: f64 = 1e-6;

/// Tolerance for rounding scaled lengths that should be whole view pixels.
pub const EPSILON: f64 = 1e-9;
