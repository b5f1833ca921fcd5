//! Arrangement result representation.

use nalgebra::Vector3;

use crate::orientation::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Leftover linear space per container axis after the fitted grid.
///
/// All components are non-negative by construction of the solver's floor
/// division.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemainingSpace {
    /// Leftover along the container length, in meters.
    pub length: f64,
    /// Leftover along the container width, in meters.
    pub width: f64,
    /// Leftover along the container height, in meters.
    pub height: f64,
}

/// One feasible grid arrangement of boxes in a container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrangementResult {
    /// The box orientation this arrangement uses.
    pub orientation: Orientation,

    /// Number of boxes along the container length.
    pub length_count: u32,

    /// Number of boxes along the container width.
    pub width_count: u32,

    /// Number of boxes along the container height.
    pub height_count: u32,

    /// Total boxes: `length_count * width_count * height_count`,
    /// saturating at `u64::MAX` for degenerate-small boxes.
    pub total_boxes: u64,

    /// Percentage of container volume occupied, in [0, 100].
    pub efficiency: f64,

    /// Leftover linear space per axis, in meters.
    pub remaining: RemainingSpace,

    /// Box edges in meters, permuted onto the container's
    /// (length, width, height) axes for this orientation.
    pub oriented_box: Vector3<f64>,
}

impl ArrangementResult {
    /// Returns the grid shape as (length, width, height) counts.
    pub fn grid(&self) -> (u32, u32, u32) {
        (self.length_count, self.width_count, self.height_count)
    }

    /// Returns efficiency as a display string, e.g. `"60.2%"`.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.efficiency)
    }
}
