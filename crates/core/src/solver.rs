//! Grid arrangement solver.

use std::cmp::Ordering;

use crate::container::ContainerSpec;
use crate::geometry::BoxDimensions;
use crate::orientation::Orientation;
use crate::result::{ArrangementResult, RemainingSpace};

/// Evaluates all six axis-aligned orientations of a uniform box against a
/// container and ranks the resulting grid arrangements.
///
/// Pure and stateless; recomputed fully on every call.
pub struct ArrangementSolver;

impl ArrangementSolver {
    /// Computes every feasible arrangement, best first.
    ///
    /// Results are sorted descending by `total_boxes`, ties broken by
    /// descending `efficiency`; callers rely on index 0 being the best
    /// arrangement. Degenerate inputs (any box or container edge <= 0) and
    /// boxes that fit in no orientation both yield an empty vector.
    pub fn solve(box_dims: &BoxDimensions, container: &ContainerSpec) -> Vec<ArrangementResult> {
        let dims = box_dims.to_meters();

        if !box_dims.is_valid() || !container.is_valid() {
            log::debug!(
                "degenerate solve input: box {:?}, container '{}'",
                dims,
                container.name()
            );
            return Vec::new();
        }

        let box_volume = dims.x * dims.y * dims.z;
        let container_volume = container.volume();
        let c = container.dimensions();

        let mut results: Vec<ArrangementResult> = Orientation::ALL
            .iter()
            .filter_map(|&orientation| {
                let oriented = orientation.apply(&dims);

                let length_count = (c.x / oriented.x).floor() as u32;
                let width_count = (c.y / oriented.y).floor() as u32;
                let height_count = (c.z / oriented.z).floor() as u32;

                if length_count == 0 || width_count == 0 || height_count == 0 {
                    return None;
                }

                // A micro box against a container-scale axis can push the
                // three-factor product past u64::MAX; saturate instead of
                // overflowing. Efficiency uses the f64 product so it stays
                // exact even when the integer count saturates.
                let total_boxes = u64::from(length_count)
                    .saturating_mul(u64::from(width_count))
                    .saturating_mul(u64::from(height_count));
                let used_volume = f64::from(length_count)
                    * f64::from(width_count)
                    * f64::from(height_count)
                    * box_volume;
                let efficiency = (100.0 * used_volume / container_volume).clamp(0.0, 100.0);

                Some(ArrangementResult {
                    orientation,
                    length_count,
                    width_count,
                    height_count,
                    total_boxes,
                    efficiency,
                    remaining: RemainingSpace {
                        length: c.x - f64::from(length_count) * oriented.x,
                        width: c.y - f64::from(width_count) * oriented.y,
                        height: c.z - f64::from(height_count) * oriented.z,
                    },
                    oriented_box: oriented,
                })
            })
            .collect();

        // Stable sort keeps enumeration order among exact ties.
        results.sort_by(|a, b| {
            b.total_boxes.cmp(&a.total_boxes).then_with(|| {
                b.efficiency
                    .partial_cmp(&a.efficiency)
                    .unwrap_or(Ordering::Equal)
            })
        });

        results
    }

    /// Convenience accessor for the best arrangement, if any orientation fits.
    pub fn best(box_dims: &BoxDimensions, container: &ContainerSpec) -> Option<ArrangementResult> {
        Self::solve(box_dims, container).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::StandardContainer;
    use crate::units::LinearUnit;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_cube_in_twenty_ft() {
        let b = BoxDimensions::meters(1.0, 1.0, 1.0);
        let c = StandardContainer::TwentyFt.spec();

        let results = ArrangementSolver::solve(&b, &c);
        // Cubic box: all six orientations survive with identical values.
        assert_eq!(results.len(), 6);

        let best = &results[0];
        assert_eq!(best.grid(), (5, 2, 2));
        assert_eq!(best.total_boxes, 20);
        assert_relative_eq!(best.remaining.length, 0.898, epsilon = 1e-9);
        assert_relative_eq!(best.remaining.width, 0.352, epsilon = 1e-9);
        assert_relative_eq!(best.remaining.height, 0.393, epsilon = 1e-9);
        assert_relative_eq!(
            best.efficiency,
            100.0 * 20.0 / (5.898 * 2.352 * 2.393),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_degenerate_edge_returns_empty() {
        let b = BoxDimensions::meters(0.0, 5.0, 5.0);
        let c = StandardContainer::FortyFt.spec();
        assert!(ArrangementSolver::solve(&b, &c).is_empty());
    }

    #[test]
    fn test_oversized_box_returns_empty() {
        let b = BoxDimensions::meters(20.0, 20.0, 20.0);
        let c = StandardContainer::TwentyFt.spec();
        assert!(ArrangementSolver::solve(&b, &c).is_empty());
        assert!(ArrangementSolver::best(&b, &c).is_none());
    }

    #[test]
    fn test_micro_box_saturates_total() {
        // 0.1 micrometer cube: per-axis counts are fine for u32 but the
        // three-factor product exceeds u64::MAX.
        let b = BoxDimensions::meters(1e-7, 1e-7, 1e-7);
        let c = StandardContainer::TwentyFt.spec();

        let results = ArrangementSolver::solve(&b, &c);
        assert_eq!(results.len(), 6);

        let best = &results[0];
        assert_eq!(best.total_boxes, u64::MAX);
        // Efficiency is derived from the f64 product, not the saturated
        // integer, so it stays within bounds (and near 100% here).
        assert!((0.0..=100.0).contains(&best.efficiency));
        assert!(best.efficiency > 99.0);
    }

    #[test]
    fn test_unit_conversion_applied() {
        // 100 cm cube behaves exactly like a 1 m cube.
        let b = BoxDimensions::new(100.0, 100.0, 100.0, LinearUnit::Centimeter);
        let c = StandardContainer::TwentyFt.spec();
        let best = ArrangementSolver::best(&b, &c).unwrap();
        assert_eq!(best.total_boxes, 20);
    }

    #[test]
    fn test_orientation_ranking_forty_ft_high_cube() {
        // Hand-computed per orientation for a 0.4 x 0.3 x 0.3 box in
        // 12.032 x 2.352 x 2.698:
        //   (0.4, 0.3, 0.3): 30 * 7 * 8 = 1680
        //   (0.3, 0.4, 0.3): 40 * 5 * 8 = 1600
        //   (0.3, 0.3, 0.4): 40 * 7 * 6 = 1680
        let b = BoxDimensions::meters(0.4, 0.3, 0.3);
        let c = StandardContainer::FortyFtHighCube.spec();

        let results = ArrangementSolver::solve(&b, &c);
        assert_eq!(results.len(), 6);

        let best = &results[0];
        assert_eq!(best.total_boxes, 1680);
        for r in &results {
            assert!(best.total_boxes >= r.total_boxes);
        }
    }

    #[test]
    fn test_no_overflow_per_axis() {
        let b = BoxDimensions::meters(0.7, 0.45, 0.33);
        let c = StandardContainer::FortyFiveFtHighCube.spec();

        for r in ArrangementSolver::solve(&b, &c) {
            let eps = 1e-9;
            assert!(f64::from(r.length_count) * r.oriented_box.x <= c.length() + eps);
            assert!(f64::from(r.width_count) * r.oriented_box.y <= c.width() + eps);
            assert!(f64::from(r.height_count) * r.oriented_box.z <= c.height() + eps);
            assert!(r.remaining.length >= 0.0);
            assert!(r.remaining.width >= 0.0);
            assert!(r.remaining.height >= 0.0);
            assert!((0.0..=100.0).contains(&r.efficiency));
        }
    }
}
