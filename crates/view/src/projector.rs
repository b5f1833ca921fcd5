//! Container-to-canvas projection.

use boxfit_core::{ArrangementResult, ContainerSpec};
use nalgebra::Vector3;

use crate::projection::{BoxRect, ViewKind, ViewProjection};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel tolerance when clipping rectangles against the canvas edge.
const CLIP_EPSILON: f64 = 1e-6;

/// Logical canvas budget a view must fit into, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanvasBudget {
    /// Maximum view width in logical pixels.
    pub max_width: f64,
    /// Maximum view height in logical pixels.
    pub max_height: f64,
}

impl Default for CanvasBudget {
    fn default() -> Self {
        Self {
            max_width: 360.0,
            max_height: 240.0,
        }
    }
}

/// Projects a container and its fitted grid into scaled 2D views.
///
/// Pure and stateless apart from the canvas budget; call once per
/// `ViewKind`.
pub struct ViewProjector {
    canvas: CanvasBudget,
}

impl ViewProjector {
    /// Creates a projector with the given canvas budget.
    pub fn new(canvas: CanvasBudget) -> Self {
        Self { canvas }
    }

    /// Creates a projector with the default canvas budget.
    pub fn default_canvas() -> Self {
        Self::new(CanvasBudget::default())
    }

    /// Returns the canvas budget.
    pub fn canvas(&self) -> CanvasBudget {
        self.canvas
    }

    /// Projects one view of the container and arrangement.
    ///
    /// `oriented_box` carries the box edges in meters, permuted onto the
    /// container axes (`ArrangementResult::oriented_box` for a solved
    /// arrangement). Degenerate containers, missing arrangements and zero
    /// or negative box edges all yield a projection with an empty box
    /// list; this function never panics and never divides by a zero edge.
    pub fn project(
        &self,
        container: &ContainerSpec,
        oriented_box: &Vector3<f64>,
        arrangement: Option<&ArrangementResult>,
        view: ViewKind,
    ) -> ViewProjection {
        let (extent_x, extent_y) = view.container_extent(container);
        if extent_x <= 0.0 || extent_y <= 0.0 {
            log::debug!(
                "degenerate container '{}' in {} view",
                container.name(),
                view.label()
            );
            return ViewProjection::default();
        }

        // Fit the container footprint into the canvas, preserving aspect.
        let aspect = extent_x / extent_y;
        let canvas_aspect = self.canvas.max_width / self.canvas.max_height;
        let (view_width, view_height) = if aspect > canvas_aspect {
            (self.canvas.max_width, self.canvas.max_width / aspect)
        } else {
            (self.canvas.max_height * aspect, self.canvas.max_height)
        };

        let scale_x = view_width / extent_x;
        let scale_y = view_height / extent_y;

        let mut projection = ViewProjection {
            view_width,
            view_height,
            scale_x,
            scale_y,
            boxes: Vec::new(),
        };

        let Some(arrangement) = arrangement else {
            return projection;
        };

        let (box_x, box_y) = view.box_extent(oriented_box);
        // Guard before dividing by a box edge.
        if box_x <= 0.0 || box_y <= 0.0 {
            return projection;
        }

        let pixel_width = box_x * scale_x;
        let pixel_height = box_y * scale_y;
        if pixel_width <= 0.0 || pixel_height <= 0.0 {
            return projection;
        }

        // Two-layer clamp: the solver floors in meter space, this view
        // floors in pixel space, and the two can legitimately disagree by
        // one unit.
        let max_cols = (view_width / pixel_width).floor() as u32;
        let max_rows = (view_height / pixel_height).floor() as u32;
        let (solver_cols, solver_rows) = view.grid_counts(arrangement);
        let cols = solver_cols.min(max_cols);
        let rows = solver_rows.min(max_rows);
        if cols < solver_cols || rows < solver_rows {
            log::debug!(
                "{} view clamped grid {}x{} to {}x{}",
                view.label(),
                solver_cols,
                solver_rows,
                cols,
                rows
            );
        }

        for row in 0..rows {
            for col in 0..cols {
                let x = f64::from(col) * pixel_width;
                let y = f64::from(row) * pixel_height;
                // Second invariant layer: never emit a rect past the canvas.
                if x + pixel_width > view_width + CLIP_EPSILON
                    || y + pixel_height > view_height + CLIP_EPSILON
                {
                    continue;
                }
                projection.boxes.push(BoxRect {
                    x,
                    y,
                    width: pixel_width,
                    height: pixel_height,
                });
            }
        }

        projection
    }

    /// Projects all three views at once, in `ViewKind::ALL` order.
    pub fn project_all(
        &self,
        container: &ContainerSpec,
        oriented_box: &Vector3<f64>,
        arrangement: Option<&ArrangementResult>,
    ) -> [ViewProjection; 3] {
        ViewKind::ALL.map(|view| self.project(container, oriented_box, arrangement, view))
    }
}
