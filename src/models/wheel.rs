//! Wheel geometry: segment layout for the circular selector.

use serde::{Deserialize, Serialize};

/// Fixed pointer position in wheel coordinates. Segments are drawn clockwise
/// from 0 degrees at 3 o'clock, so the top pointer sits at 270 degrees.
pub const POINTER_DEGREES: f64 = 270.0;

/// Extra full rotations added to a spin target by default.
pub const DEFAULT_EXTRA_ROTATIONS: u32 = 5;

/// One angular slice of the wheel, assigned to a single pool entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub label: String,
    pub start_degrees: f64,
    pub center_degrees: f64,
    pub end_degrees: f64,
}

/// Cached wheel geometry for an ordered list of labels. Rebuilt whenever the
/// backing pool changes; an assignment run keeps its own layout for the
/// shrinking remaining pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelLayout {
    pub segment_count: usize,
    /// 360 / segment_count; 0 when the wheel is empty.
    pub segment_degrees: f64,
    pub segments: Vec<WheelSegment>,
}

impl WheelLayout {
    /// Build the layout for an ordered list of labels. An empty list yields an
    /// empty layout (the renderer shows the "add participants" disc instead).
    pub fn for_labels(labels: &[String]) -> Self {
        if labels.is_empty() {
            return Self::default();
        }
        let segment_degrees = 360.0 / labels.len() as f64;
        let segments = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let start = i as f64 * segment_degrees;
                WheelSegment {
                    label: label.clone(),
                    start_degrees: start,
                    center_degrees: start + segment_degrees / 2.0,
                    end_degrees: start + segment_degrees,
                }
            })
            .collect();
        Self {
            segment_count: labels.len(),
            segment_degrees,
            segments,
        }
    }
}
