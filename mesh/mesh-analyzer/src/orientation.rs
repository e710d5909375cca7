//! Build-orientation search over a fixed candidate set.
//!
//! The mesh is never rotated: each candidate is evaluated by comparing
//! face normals against the candidate up vector, so the search costs one
//! overhang scan per candidate.

use mesh_types::{IndexedMesh, Vector3};
use tracing::debug;

use crate::overhang::analyze_overhangs;
use crate::report::OrientationResult;

/// The 26 candidate up vectors, in evaluation order: 6 cardinals, 12 edge
/// diagonals (axis pairs at 45°), 8 corner diagonals.
#[must_use]
pub fn candidate_up_vectors() -> [Vector3<f64>; 26] {
    let e = std::f64::consts::FRAC_1_SQRT_2;
    let c = 1.0 / 3.0_f64.sqrt();

    [
        // Cardinals
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
        // Edge diagonals
        Vector3::new(e, e, 0.0),
        Vector3::new(e, -e, 0.0),
        Vector3::new(-e, e, 0.0),
        Vector3::new(-e, -e, 0.0),
        Vector3::new(e, 0.0, e),
        Vector3::new(e, 0.0, -e),
        Vector3::new(-e, 0.0, e),
        Vector3::new(-e, 0.0, -e),
        Vector3::new(0.0, e, e),
        Vector3::new(0.0, e, -e),
        Vector3::new(0.0, -e, e),
        Vector3::new(0.0, -e, -e),
        // Corner diagonals
        Vector3::new(c, c, c),
        Vector3::new(c, c, -c),
        Vector3::new(c, -c, c),
        Vector3::new(c, -c, -c),
        Vector3::new(-c, c, c),
        Vector3::new(-c, c, -c),
        Vector3::new(-c, -c, c),
        Vector3::new(-c, -c, -c),
    ]
}

/// Search the candidate up vectors for the one minimizing overhang area.
///
/// The baseline is the Z-up orientation; a candidate replaces the best
/// only on a strict improvement, so ties keep the earliest candidate (or
/// the baseline itself). `resolution` caps how many candidates are
/// evaluated, taking a prefix of the fixed order; pass 26 (or more) for
/// the full set. Improvement is reported as 0 when the baseline had no
/// overhangs.
#[must_use]
pub fn find_best_orientation(
    mesh: &IndexedMesh,
    resolution: usize,
    critical_angle_deg: f64,
) -> OrientationResult {
    let baseline_up = Vector3::z();
    let baseline = analyze_overhangs(mesh, &baseline_up, critical_angle_deg);

    let mut best_area = baseline.overhang_area;
    let mut best_up = baseline_up;

    let candidates = candidate_up_vectors();
    let count = resolution.min(candidates.len());
    debug!(candidates = count, "searching build orientations");

    for candidate in &candidates[..count] {
        let scan = analyze_overhangs(mesh, candidate, critical_angle_deg);
        if scan.overhang_area < best_area {
            best_area = scan.overhang_area;
            best_up = *candidate;
        }
    }

    let improvement_percent = if baseline.overhang_area > 0.0 {
        (baseline.overhang_area - best_area) / baseline.overhang_area * 100.0
    } else {
        0.0
    };

    OrientationResult {
        optimal_up_vector: best_up,
        original_overhang_area: baseline.overhang_area,
        optimized_overhang_area: best_area,
        improvement_percent,
    }
}
