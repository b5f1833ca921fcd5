//! Axis-aligned box orientations.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six ways to assign a box's edges to the container's
/// (length, width, height) axes.
///
/// The variant name spells out which box edge lands on which container
/// axis, in (length, width, height) order. The six permutations are fixed
/// and enumerated explicitly; a cubic box produces six numerically
/// identical entries and no deduplication is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Box (length, width, height) on container (length, width, height).
    #[default]
    Lwh,
    /// Box (length, height, width).
    Lhw,
    /// Box (width, length, height).
    Wlh,
    /// Box (width, height, length).
    Whl,
    /// Box (height, length, width).
    Hlw,
    /// Box (height, width, length).
    Hwl,
}

impl Orientation {
    /// All six orientations, in enumeration order.
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Lhw,
        Orientation::Wlh,
        Orientation::Whl,
        Orientation::Hlw,
        Orientation::Hwl,
    ];

    /// Indices into a (length, width, height) triple for each container axis.
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Orientation::Lwh => (0, 1, 2),
            Orientation::Lhw => (0, 2, 1),
            Orientation::Wlh => (1, 0, 2),
            Orientation::Whl => (1, 2, 0),
            Orientation::Hlw => (2, 0, 1),
            Orientation::Hwl => (2, 1, 0),
        }
    }

    /// Permutes box edges onto the container's (length, width, height) axes.
    pub fn apply(self, dims: &Vector3<f64>) -> Vector3<f64> {
        let (l, w, h) = self.axes();
        Vector3::new(dims[l], dims[w], dims[h])
    }

    /// Display label, e.g. `"W x H x L"`.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Lwh => "L x W x H",
            Orientation::Lhw => "L x H x W",
            Orientation::Wlh => "W x L x H",
            Orientation::Whl => "W x H x L",
            Orientation::Hlw => "H x L x W",
            Orientation::Hwl => "H x W x L",
        }
    }
}
