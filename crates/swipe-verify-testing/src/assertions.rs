//! Assertion helpers for animated values.

use swipe_verify::SwipeVerifyFrame;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that fill width equals `handle_size + handle_offset` in `frame`.
pub fn assert_fill_follows_handle(frame: &SwipeVerifyFrame, handle_size: f32) {
    assert_approx_eq(
        frame.fill_width,
        handle_size + frame.handle_offset,
        1e-3,
        "fill width",
    );
}

/// Assert that the handle offset lies inside `[0, max(max_offset, 0)]`.
pub fn assert_offset_in_track(frame: &SwipeVerifyFrame, max_offset: f32) {
    let upper = max_offset.max(0.0);
    assert!(
        (0.0..=upper).contains(&frame.handle_offset),
        "handle offset {} outside [0, {}]",
        frame.handle_offset,
        upper
    );
}
