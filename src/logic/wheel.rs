//! Angle resolution: map a drawn segment index to a target rotation.

use crate::models::{RouletteError, POINTER_DEGREES};

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Target rotation (degrees) that parks the center of segment `index` under
/// the fixed top pointer, plus `extra_rotations` full turns before settling.
///
/// Segments are laid out clockwise from 0 degrees at 3 o'clock; the pointer
/// sits at 270 degrees in the same frame. Pure and deterministic; easing and
/// timing belong to the page animation, not here. A single-segment wheel is
/// degenerate but legal.
pub fn resolve_target_angle(
    index: usize,
    segment_count: usize,
    extra_rotations: u32,
) -> Result<f64, RouletteError> {
    if segment_count == 0 {
        return Err(RouletteError::InvalidSegmentCount);
    }
    if index >= segment_count {
        return Err(RouletteError::IndexOutOfRange {
            index,
            len: segment_count,
        });
    }
    let segment_degrees = 360.0 / segment_count as f64;
    let center = index as f64 * segment_degrees + segment_degrees / 2.0;
    Ok(normalize_degrees(POINTER_DEGREES - center) + f64::from(extra_rotations) * 360.0)
}
