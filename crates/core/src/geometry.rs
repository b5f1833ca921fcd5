//! Box geometry for container loading.

use nalgebra::Vector3;

use crate::units::LinearUnit;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of one rectangular box, in a declared unit.
///
/// Immutable once constructed for a calculation pass; the solver converts
/// to meters internally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxDimensions {
    /// Dimensions (length, width, height) in the declared unit.
    dimensions: Vector3<f64>,

    /// Unit the dimensions are expressed in.
    unit: LinearUnit,
}

impl BoxDimensions {
    /// Creates box dimensions in the given unit.
    pub fn new(length: f64, width: f64, height: f64, unit: LinearUnit) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
            unit,
        }
    }

    /// Creates box dimensions already expressed in meters.
    pub fn meters(length: f64, width: f64, height: f64) -> Self {
        Self::new(length, width, height, LinearUnit::Meter)
    }

    /// Returns the length in the declared unit.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width in the declared unit.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height in the declared unit.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the declared unit.
    pub fn unit(&self) -> LinearUnit {
        self.unit
    }

    /// Returns the dimensions converted to meters.
    pub fn to_meters(&self) -> Vector3<f64> {
        self.dimensions * self.unit.factor_to_meters()
    }

    /// Returns the box volume in cubic meters.
    pub fn volume_m3(&self) -> f64 {
        let m = self.to_meters();
        m.x * m.y * m.z
    }

    /// Returns true if all three edges are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.dimensions.x > 0.0 && self.dimensions.y > 0.0 && self.dimensions.z > 0.0
    }

    /// Validates that all dimensions are strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::InvalidDimension(format!(
                "all edges must be positive, got {} x {} x {} {}",
                self.dimensions.x, self.dimensions.y, self.dimensions.z, self.unit
            )));
        }
        Ok(())
    }
}
