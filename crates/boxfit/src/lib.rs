//! # Boxfit
//!
//! Container loading optimizer: given a uniform rectangular box and a
//! rectangular shipping container, compute how many boxes fit, in which
//! axis-aligned orientation, and project the result as three orthogonal
//! technical-drawing views.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxfit::core::{ArrangementSolver, BoxDimensions, StandardContainer};
//! use boxfit::view::{ViewKind, ViewProjector};
//!
//! let box_dims = BoxDimensions::meters(1.0, 1.0, 1.0);
//! let container = StandardContainer::TwentyFt.spec();
//!
//! let best = ArrangementSolver::best(&box_dims, &container).unwrap();
//! assert_eq!(best.total_boxes, 20);
//!
//! let projector = ViewProjector::default_canvas();
//! let top = projector.project(&container, &best.oriented_box, Some(&best), ViewKind::Top);
//! assert_eq!(top.boxes.len(), 10);
//! ```
//!
//! ## Feature Flags
//!
//! - `view` (default): technical-drawing projections
//! - `serde`: serialization support

/// Core types and the arrangement solver.
pub use boxfit_core as core;

/// Technical-drawing projections.
#[cfg(feature = "view")]
pub use boxfit_view as view;

// Re-export commonly used types at root level
pub use boxfit_core::{
    ArrangementResult, ArrangementSolver, BoxDimensions, ContainerSpec, EffectiveQuantity, Error,
    LinearUnit, ManualQuantityValidator, Orientation, RemainingSpace, Result, StandardContainer,
};
#[cfg(feature = "view")]
pub use boxfit_view::{ViewKind, ViewProjection, ViewProjector};
