//! Linear measurement units and conversions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear measurement unit for box dimensions.
///
/// Container dimensions are always expressed in meters; box dimensions may
/// arrive in any of these units and are converted before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinearUnit {
    /// Millimeters.
    Millimeter,
    /// Centimeters.
    #[default]
    Centimeter,
    /// Inches.
    Inch,
    /// Meters.
    Meter,
}

impl LinearUnit {
    /// All supported units, in display order.
    pub const ALL: [LinearUnit; 4] = [
        LinearUnit::Millimeter,
        LinearUnit::Centimeter,
        LinearUnit::Inch,
        LinearUnit::Meter,
    ];

    /// Conversion factor from this unit to meters.
    pub fn factor_to_meters(self) -> f64 {
        match self {
            LinearUnit::Millimeter => 0.001,
            LinearUnit::Centimeter => 0.01,
            LinearUnit::Inch => 0.0254,
            LinearUnit::Meter => 1.0,
        }
    }

    /// Converts a value in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        value * self.factor_to_meters()
    }

    /// Converts a value in meters to this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.factor_to_meters()
    }

    /// Short unit symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            LinearUnit::Millimeter => "mm",
            LinearUnit::Centimeter => "cm",
            LinearUnit::Inch => "in",
            LinearUnit::Meter => "m",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factors() {
        assert_relative_eq!(LinearUnit::Millimeter.factor_to_meters(), 0.001);
        assert_relative_eq!(LinearUnit::Centimeter.factor_to_meters(), 0.01);
        assert_relative_eq!(LinearUnit::Inch.factor_to_meters(), 0.0254);
        assert_relative_eq!(LinearUnit::Meter.factor_to_meters(), 1.0);
    }

    #[test]
    fn test_to_meters() {
        assert_relative_eq!(LinearUnit::Centimeter.to_meters(250.0), 2.5);
        assert_relative_eq!(LinearUnit::Millimeter.to_meters(1500.0), 1.5);
        assert_relative_eq!(LinearUnit::Inch.to_meters(10.0), 0.254);
        assert_relative_eq!(LinearUnit::Meter.to_meters(3.2), 3.2);
    }

    #[test]
    fn test_round_trip() {
        for unit in LinearUnit::ALL {
            for value in [0.1, 1.0, 12.7, 250.0, 10000.0] {
                let back = unit.from_meters(unit.to_meters(value));
                assert_relative_eq!(back, value, max_relative = 1e-9);
            }
        }
    }
}
