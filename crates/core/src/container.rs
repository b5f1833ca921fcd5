//! Shipping container specifications.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular shipping container, always expressed in meters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSpec {
    /// Display name.
    name: String,

    /// Internal dimensions (length, width, height) in meters.
    dimensions: Vector3<f64>,
}

impl ContainerSpec {
    /// Creates a custom container with internal dimensions in meters.
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the internal dimensions (length, width, height) in meters.
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the internal length in meters.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the internal width in meters.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the internal height in meters.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the internal volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns true if all three dimensions are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.dimensions.x > 0.0 && self.dimensions.y > 0.0 && self.dimensions.z > 0.0
    }

    /// Validates that all dimensions are strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::InvalidContainer(format!(
                "all dimensions of '{}' must be positive",
                self.name
            )));
        }
        Ok(())
    }
}

/// Standard container sizes with fixed internal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StandardContainer {
    /// 20ft general purpose.
    #[default]
    TwentyFt,
    /// 40ft general purpose.
    FortyFt,
    /// 40ft high cube.
    FortyFtHighCube,
    /// 45ft high cube.
    FortyFiveFtHighCube,
}

impl StandardContainer {
    /// All standard sizes, in display order.
    pub const ALL: [StandardContainer; 4] = [
        StandardContainer::TwentyFt,
        StandardContainer::FortyFt,
        StandardContainer::FortyFtHighCube,
        StandardContainer::FortyFiveFtHighCube,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StandardContainer::TwentyFt => "20ft",
            StandardContainer::FortyFt => "40ft",
            StandardContainer::FortyFtHighCube => "40ft High Cube",
            StandardContainer::FortyFiveFtHighCube => "45ft High Cube",
        }
    }

    /// Internal dimensions of this standard size.
    pub fn spec(self) -> ContainerSpec {
        match self {
            StandardContainer::TwentyFt => ContainerSpec::new(self.label(), 5.898, 2.352, 2.393),
            StandardContainer::FortyFt => ContainerSpec::new(self.label(), 12.032, 2.352, 2.393),
            StandardContainer::FortyFtHighCube => {
                ContainerSpec::new(self.label(), 12.032, 2.352, 2.698)
            }
            StandardContainer::FortyFiveFtHighCube => {
                ContainerSpec::new(self.label(), 13.556, 2.352, 2.698)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_presets() {
        let c20 = StandardContainer::TwentyFt.spec();
        assert_relative_eq!(c20.length(), 5.898);
        assert_relative_eq!(c20.width(), 2.352);
        assert_relative_eq!(c20.height(), 2.393);

        let c45 = StandardContainer::FortyFiveFtHighCube.spec();
        assert_relative_eq!(c45.length(), 13.556);
        assert_relative_eq!(c45.height(), 2.698);

        assert_eq!(StandardContainer::ALL.len(), 4);
    }

    #[test]
    fn test_volume() {
        let c = ContainerSpec::new("test", 2.0, 3.0, 4.0);
        assert_relative_eq!(c.volume(), 24.0);
    }

    #[test]
    fn test_validation() {
        assert!(ContainerSpec::new("ok", 1.0, 1.0, 1.0).validate().is_ok());
        assert!(ContainerSpec::new("bad", 0.0, 1.0, 1.0).validate().is_err());
    }
}
