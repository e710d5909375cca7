//! Analysis result types.

use mesh_types::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Areas accumulated by one overhang scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverhangScan {
    /// Area of faces classified as overhangs for the scanned up vector.
    pub overhang_area: f64,
    /// Total surface area visited by the scan.
    pub total_area: f64,
}

impl OverhangScan {
    /// Overhang area as a percentage of total surface area.
    ///
    /// Returns 0 when the total area is zero (empty mesh).
    #[must_use]
    pub fn overhang_percentage(&self) -> f64 {
        if self.total_area > 0.0 {
            self.overhang_area / self.total_area * 100.0
        } else {
            0.0
        }
    }
}

/// Summary of a printability analysis run.
///
/// Produced by [`Analyzer::printability_report`](crate::Analyzer::printability_report).
/// The score starts at 100 and loses up to 50 points each for overhangs and
/// thin walls; it always lands in `[0, 100]`. The default report is the
/// perfect score with no areas, which is also what queries on an empty
/// mesh return.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintabilityReport {
    /// Area of faces needing support material (mm²).
    pub overhang_area: f64,
    /// Overhang area as a percentage of total surface area.
    pub overhang_percentage: f64,
    /// Number of sampled vertices whose local wall is thinner than the
    /// requested minimum. Zero when no spatial index was available.
    pub thin_wall_vertex_count: usize,
    /// Overall printability score in `[0, 100]`, higher is better.
    pub score: f64,
    /// Total surface area of the mesh (mm²).
    pub total_surface_area: f64,
}

impl Default for PrintabilityReport {
    fn default() -> Self {
        Self {
            overhang_area: 0.0,
            overhang_percentage: 0.0,
            thin_wall_vertex_count: 0,
            score: 100.0,
            total_surface_area: 0.0,
        }
    }
}

/// Outcome of the build-orientation search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationResult {
    /// The up vector minimizing overhang area over the candidate set.
    pub optimal_up_vector: Vector3<f64>,
    /// Overhang area for the Z-up baseline (mm²).
    pub original_overhang_area: f64,
    /// Overhang area for the optimal up vector (mm²).
    pub optimized_overhang_area: f64,
    /// Reduction relative to the baseline, in percent (0 when the baseline
    /// had no overhangs).
    pub improvement_percent: f64,
}

impl Default for OrientationResult {
    fn default() -> Self {
        Self {
            optimal_up_vector: Vector3::z(),
            original_overhang_area: 0.0,
            optimized_overhang_area: 0.0,
            improvement_percent: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_empty_scan_is_zero() {
        let scan = OverhangScan::default();
        assert!(scan.overhang_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_is_ratio_of_areas() {
        let scan = OverhangScan {
            overhang_area: 2.5,
            total_area: 10.0,
        };
        assert!((scan.overhang_percentage() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn default_report_is_a_perfect_score() {
        let report = PrintabilityReport::default();
        assert!((report.score - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.thin_wall_vertex_count, 0);
        assert!(report.overhang_area.abs() < f64::EPSILON);
    }

    #[test]
    fn default_orientation_is_z_up() {
        let result = OrientationResult::default();
        assert_eq!(result.optimal_up_vector, Vector3::z());
        assert!(result.improvement_percent.abs() < f64::EPSILON);
    }
}
