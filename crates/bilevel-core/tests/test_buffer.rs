mod common;

use bilevel_core::buffer::{Channels, PixelBuffer};
use bilevel_core::crop::CropRect;
use bilevel_core::error::BilevelError;

use common::{gray_from_fn, rgb_from_fn};

#[test]
fn test_from_raw_gray() {
    let buf = PixelBuffer::from_raw(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(buf.width(), 3);
    assert_eq!(buf.height(), 2);
    assert_eq!(buf.channels(), Channels::Gray);
    assert_eq!(buf.pixel_count(), 6);
    assert_eq!(buf.row_len(), 3);
    assert_eq!(buf.samples(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(buf.pixel(2, 1), Some(&[6u8][..]));
}

#[test]
fn test_from_raw_rgb_interleaved() {
    let samples: Vec<u8> = (0..12).collect();
    let buf = PixelBuffer::from_raw(2, 2, 3, samples).unwrap();
    assert_eq!(buf.channels(), Channels::Rgb);
    assert_eq!(buf.row_len(), 6);
    assert_eq!(buf.pixel(1, 0), Some(&[3u8, 4, 5][..]));
    assert_eq!(buf.pixel(0, 1), Some(&[6u8, 7, 8][..]));
    assert_eq!(buf.view().dim(), (2, 2, 3));
}

#[test]
fn test_pixel_out_of_bounds() {
    let buf = PixelBuffer::from_raw(2, 2, 1, vec![0; 4]).unwrap();
    assert_eq!(buf.pixel(2, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
}

#[test]
fn test_from_raw_length_mismatch() {
    let result = PixelBuffer::from_raw(4, 4, 3, vec![0; 47]);
    assert!(matches!(result, Err(BilevelError::Decode(_))));
}

#[test]
fn test_from_raw_bad_channel_count() {
    let result = PixelBuffer::from_raw(2, 2, 4, vec![0; 16]);
    assert!(matches!(result, Err(BilevelError::Decode(_))));
    let result = PixelBuffer::from_raw(2, 2, 0, vec![]);
    assert!(matches!(result, Err(BilevelError::Decode(_))));
}

#[test]
fn test_from_raw_zero_dimensions() {
    let result = PixelBuffer::from_raw(0, 5, 1, vec![]);
    assert!(matches!(result, Err(BilevelError::Decode(_))));
}

#[test]
fn test_crop_gray_repacks_rows() {
    // 4x4, sample = row * 16 + col
    let buf = gray_from_fn(4, 4, |x, y| (y * 16 + x) as u8);
    let cropped = buf.crop(&CropRect::new(1, 1, 3, 3)).unwrap();
    assert_eq!(cropped.width(), 2);
    assert_eq!(cropped.height(), 2);
    assert_eq!(cropped.samples(), &[17, 18, 33, 34]);
}

#[test]
fn test_crop_rgb_keeps_channels() {
    let buf = rgb_from_fn(3, 2, |x, y| [x as u8, y as u8, 9]);
    let cropped = buf.crop(&CropRect::new(2, 0, 3, 2)).unwrap();
    assert_eq!(cropped.channels(), Channels::Rgb);
    assert_eq!(cropped.samples(), &[2, 0, 9, 2, 1, 9]);
}

#[test]
fn test_crop_full_extent() {
    let buf = gray_from_fn(5, 3, |x, y| (x + y) as u8);
    let cropped = buf.crop(&CropRect::new(0, 0, 5, 3)).unwrap();
    assert_eq!(cropped, buf);
}

#[test]
fn test_crop_does_not_touch_source() {
    let buf = gray_from_fn(4, 4, |x, _| x as u8);
    let before = buf.clone();
    let _ = buf.crop(&CropRect::new(0, 0, 2, 2)).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn test_crop_degenerate_rejected() {
    let buf = gray_from_fn(10, 10, |_, _| 0);
    let empty_w = buf.crop(&CropRect::new(3, 1, 3, 5));
    assert!(matches!(empty_w, Err(BilevelError::InvalidRegion(_))));
    let inverted = buf.crop(&CropRect::new(1, 5, 4, 2));
    assert!(matches!(inverted, Err(BilevelError::InvalidRegion(_))));
}

#[test]
fn test_crop_out_of_bounds_rejected() {
    let buf = gray_from_fn(10, 10, |_, _| 0);
    let result = buf.crop(&CropRect::new(5, 5, 11, 8));
    assert!(matches!(result, Err(BilevelError::InvalidRegion(_))));
}

#[test]
fn test_display_describes_shape() {
    let gray = gray_from_fn(640, 2, |_, _| 0);
    assert_eq!(gray.to_string(), "640 x 2 (gray)");
    let rgb = rgb_from_fn(3, 4, |_, _| [0, 0, 0]);
    assert_eq!(rgb.to_string(), "3 x 4 (3 channels)");
}
