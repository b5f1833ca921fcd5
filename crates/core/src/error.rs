//! Error types for boxfit.

use thiserror::Error;

/// Result type alias for boxfit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during container loading calculations.
#[derive(Debug, Error)]
pub enum Error {
    /// A box dimension is not strictly positive.
    #[error("Invalid box dimension: {0}")]
    InvalidDimension(String),

    /// A container dimension is not strictly positive.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// A manual quantity override must be at least 1.
    #[error("Manual quantity must be at least 1")]
    InvalidQuantity,

    /// A manual quantity override exceeds the solver-derived capacity.
    #[error("Manual quantity {requested} exceeds container capacity of {capacity}")]
    ExceedsCapacity {
        /// The quantity the caller asked for.
        requested: u64,
        /// The maximum the best arrangement can hold.
        capacity: u64,
    },
}
