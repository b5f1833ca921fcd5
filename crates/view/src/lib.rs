//! # Boxfit View
//!
//! Orthogonal technical-drawing projections for the boxfit container
//! loading engine.
//!
//! Maps a container and a solved arrangement into three independent 2D
//! scaled views (top, front, side), each a grid of pixel rectangles
//! clipped to a logical canvas.

pub mod projection;
pub mod projector;

// Re-exports
pub use projection::{BoxRect, ViewKind, ViewProjection};
pub use projector::{CanvasBudget, ViewProjector};
