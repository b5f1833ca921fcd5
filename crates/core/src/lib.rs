//! # Boxfit Core
//!
//! Core types and the arrangement solver for the boxfit container loading
//! engine.
//!
//! This crate answers one question: given a uniform rectangular box and a
//! rectangular shipping container, how many boxes fit, and in which of the
//! six axis-aligned orientations?
//!
//! ## Core Components
//!
//! - **Units**: `LinearUnit` conversions between mm, cm, inch and meter
//! - **Geometry**: `BoxDimensions` (declared unit) and `ContainerSpec` (meters)
//! - **Solver**: `ArrangementSolver` enumerating the 6 box orientations
//! - **Quantity**: `ManualQuantityValidator` for caller-supplied overrides
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod container;
pub mod error;
pub mod geometry;
pub mod orientation;
pub mod quantity;
pub mod result;
pub mod solver;
pub mod units;

// Re-exports
pub use container::{ContainerSpec, StandardContainer};
pub use error::{Error, Result};
pub use geometry::BoxDimensions;
pub use orientation::Orientation;
pub use quantity::{EffectiveQuantity, ManualQuantityValidator};
pub use result::{ArrangementResult, RemainingSpace};
pub use solver::ArrangementSolver;
pub use units::LinearUnit;
