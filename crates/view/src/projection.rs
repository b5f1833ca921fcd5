//! View kinds and projection output types.

use boxfit_core::{ArrangementResult, ContainerSpec};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three orthogonal technical-drawing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViewKind {
    /// Looking down: container length (x) by width (y).
    #[default]
    Top,
    /// Looking along the length: container width (x) by height (y).
    Front,
    /// Looking along the width: container length (x) by height (y).
    Side,
}

impl ViewKind {
    /// All three views, in display order.
    pub const ALL: [ViewKind; 3] = [ViewKind::Top, ViewKind::Front, ViewKind::Side];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Top => "Top",
            ViewKind::Front => "Front",
            ViewKind::Side => "Side",
        }
    }

    /// Container extent in meters for this view's (horizontal, vertical) axes.
    pub fn container_extent(self, container: &ContainerSpec) -> (f64, f64) {
        match self {
            ViewKind::Top => (container.length(), container.width()),
            ViewKind::Front => (container.width(), container.height()),
            ViewKind::Side => (container.length(), container.height()),
        }
    }

    /// Box edges in meters for this view's (horizontal, vertical) axes.
    ///
    /// `oriented_box` holds edges already permuted onto the container's
    /// (length, width, height) axes.
    pub fn box_extent(self, oriented_box: &Vector3<f64>) -> (f64, f64) {
        match self {
            ViewKind::Top => (oriented_box.x, oriented_box.y),
            ViewKind::Front => (oriented_box.y, oriented_box.z),
            ViewKind::Side => (oriented_box.x, oriented_box.z),
        }
    }

    /// Solver-space grid counts for this view's (columns, rows).
    pub fn grid_counts(self, arrangement: &ArrangementResult) -> (u32, u32) {
        match self {
            ViewKind::Top => (arrangement.length_count, arrangement.width_count),
            ViewKind::Front => (arrangement.width_count, arrangement.height_count),
            ViewKind::Side => (arrangement.length_count, arrangement.height_count),
        }
    }
}

/// A pixel-space rectangle for one visible unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxRect {
    /// Left edge in logical pixels.
    pub x: f64,
    /// Top edge in logical pixels.
    pub y: f64,
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

/// One scaled 2D projection of the container and its fitted grid.
///
/// Always a valid renderable value: degenerate inputs produce an empty
/// `boxes` list with the container outline dimensions, never an error.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewProjection {
    /// Scaled container outline width in logical pixels.
    pub view_width: f64,
    /// Scaled container outline height in logical pixels.
    pub view_height: f64,
    /// Horizontal scale in pixels per meter.
    pub scale_x: f64,
    /// Vertical scale in pixels per meter.
    pub scale_y: f64,
    /// Visible unit cells, row-major.
    pub boxes: Vec<BoxRect>,
}

impl ViewProjection {
    /// Returns true if no boxes are visible in this view.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfit_core::StandardContainer;

    #[test]
    fn test_axis_pairs() {
        let c = StandardContainer::TwentyFt.spec();
        assert_eq!(ViewKind::Top.container_extent(&c), (5.898, 2.352));
        assert_eq!(ViewKind::Front.container_extent(&c), (2.352, 2.393));
        assert_eq!(ViewKind::Side.container_extent(&c), (5.898, 2.393));
    }

    #[test]
    fn test_box_extent_follows_orientation_axes() {
        let oriented = Vector3::new(0.4, 0.3, 0.2);
        assert_eq!(ViewKind::Top.box_extent(&oriented), (0.4, 0.3));
        assert_eq!(ViewKind::Front.box_extent(&oriented), (0.3, 0.2));
        assert_eq!(ViewKind::Side.box_extent(&oriented), (0.4, 0.2));
    }
}
