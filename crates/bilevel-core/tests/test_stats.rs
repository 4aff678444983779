mod common;

use approx::assert_abs_diff_eq;

use bilevel_core::error::BilevelError;
use bilevel_core::stats::compute_stats;

use common::{gray_from_fn, rgb_from_fn, uniform_gray};

#[test]
fn test_all_black() {
    let stats = compute_stats(&uniform_gray(4, 3, 0)).unwrap();
    assert_eq!(stats.total_pixels, 12);
    assert_eq!(stats.black_count, 12);
    assert_eq!(stats.white_count, 0);
    assert_eq!(stats.ratio, None);
    assert_eq!(stats.count_by_value.get(&0), Some(&12));
    assert_eq!(stats.count_by_value.get(&255), None);
}

#[test]
fn test_all_white_has_no_ratio() {
    let stats = compute_stats(&uniform_gray(5, 5, 255)).unwrap();
    assert_eq!(stats.white_count, 25);
    assert_eq!(stats.ratio, None);
    assert_abs_diff_eq!(stats.white_percentage(), 100.0);
    assert_abs_diff_eq!(stats.black_percentage(), 0.0);
}

#[test]
fn test_mixed_counts_and_ratio() {
    // One white column out of four.
    let buf = gray_from_fn(4, 5, |x, _| if x == 0 { 255 } else { 0 });
    let stats = compute_stats(&buf).unwrap();
    assert_eq!(stats.total_pixels, 20);
    assert_eq!(stats.white_count, 5);
    assert_eq!(stats.black_count, 15);
    assert_abs_diff_eq!(stats.ratio.unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stats.black_percentage(), 75.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stats.white_percentage(), 25.0, epsilon = 1e-12);
    assert_eq!(stats.count_by_value.len(), 2);
}

#[test]
fn test_rejects_non_binary_values() {
    let buf = gray_from_fn(3, 3, |x, y| if x == 2 && y == 1 { 128 } else { 0 });
    let result = compute_stats(&buf);
    match result {
        Err(BilevelError::InvalidInput(msg)) => assert!(msg.contains("(2, 1)"), "{msg}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_rejects_rgb() {
    let buf = rgb_from_fn(2, 2, |_, _| [0, 0, 0]);
    assert!(matches!(
        compute_stats(&buf),
        Err(BilevelError::InvalidInput(_))
    ));
}

#[test]
fn test_display_formats_ratio() {
    let buf = gray_from_fn(2, 1, |x, _| if x == 0 { 0 } else { 255 });
    let text = compute_stats(&buf).unwrap().to_string();
    assert_eq!(
        text,
        "total 2, black 1 (50.0%), white 1 (50.0%), white:black = 1.00:1"
    );
}

#[test]
fn test_display_without_ratio() {
    let text = compute_stats(&uniform_gray(1, 1, 0)).unwrap().to_string();
    assert!(text.ends_with("white:black = N/A"), "{text}");
}
