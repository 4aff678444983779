#![allow(dead_code)]

use bilevel_core::buffer::PixelBuffer;

/// Build a single-channel buffer whose samples come from `f(x, y)`.
pub fn gray_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> PixelBuffer {
    let mut samples = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            samples.push(f(x, y));
        }
    }
    PixelBuffer::from_raw(width, height, 1, samples).expect("valid gray buffer")
}

/// Build an RGB buffer whose pixels come from `f(x, y)`.
pub fn rgb_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> PixelBuffer {
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            samples.extend_from_slice(&f(x, y));
        }
    }
    PixelBuffer::from_raw(width, height, 3, samples).expect("valid rgb buffer")
}

/// Single-channel buffer filled with one value.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> PixelBuffer {
    gray_from_fn(width, height, |_, _| value)
}

/// Gray ramp where sample = (x + y * width) mod 256.
pub fn ramp_gray(width: u32, height: u32) -> PixelBuffer {
    gray_from_fn(width, height, |x, y| ((x + y * width) % 256) as u8)
}

/// RGB buffer alternating black and white pixels along each row.
pub fn alternating_rgb(width: u32, height: u32) -> PixelBuffer {
    rgb_from_fn(width, height, |x, _| if x % 2 == 0 { [0, 0, 0] } else { [255, 255, 255] })
}
