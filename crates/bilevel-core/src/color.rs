use crate::buffer::{Channels, PixelBuffer};
use crate::consts::{COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, LUMINANCE_SHIFT};
use crate::error::Result;

/// Reduce a buffer to a single luminance channel.
///
/// Single-channel input is returned as an equal copy, so the conversion is
/// idempotent. RGB input uses the BT.601 weights in 14-bit fixed point,
/// rounded to nearest.
pub fn to_grayscale(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    match buffer.channels() {
        Channels::Gray => Ok(buffer.clone()),
        Channels::Rgb => buffer.map_rows(Channels::Gray, |src, dst| {
            for (px, out) in src.chunks_exact(COLOR_CHANNEL_COUNT).zip(dst.iter_mut()) {
                *out = luminance(px[0], px[1], px[2]);
            }
        }),
    }
}

/// Luminance of one RGB pixel.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let half = 1u32 << (LUMINANCE_SHIFT - 1);
    let weighted = LUMINANCE_R * r as u32 + LUMINANCE_G * g as u32 + LUMINANCE_B * b as u32;
    ((weighted + half) >> LUMINANCE_SHIFT).min(u8::MAX as u32) as u8
}
