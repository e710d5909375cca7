//! Overhang classification by face normal.

use mesh_types::{IndexedMesh, MeshTopology, Vector3};

use crate::report::OverhangScan;

/// Scan every face and accumulate overhang and total surface area.
///
/// A face is an overhang when its unit normal `n` satisfies
/// `n · up < -cos(critical_angle)`, i.e. it points downward relative to
/// `up` by more than the critical angle. Faces are visited in storage
/// order, so the sums are bit-stable across runs of the same mesh.
/// Degenerate faces contribute no area and are never overhangs.
///
/// # Example
///
/// ```
/// use mesh_analyzer::analyze_overhangs;
/// use mesh_types::{unit_cube, Vector3};
///
/// // With Z up at 45°, only the cube's bottom faces overhang.
/// let scan = analyze_overhangs(&unit_cube(), &Vector3::z(), 45.0);
/// assert!((scan.overhang_area - 1.0).abs() < 1e-10);
/// assert!((scan.total_area - 6.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn analyze_overhangs(
    mesh: &IndexedMesh,
    up: &Vector3<f64>,
    critical_angle_deg: f64,
) -> OverhangScan {
    let cos_threshold = critical_angle_deg.to_radians().cos();

    let mut overhang_area = 0.0;
    let mut total_area = 0.0;

    for tri in mesh.triangles() {
        let area = tri.area();
        total_area += area;

        let Some(normal) = tri.normal() else {
            continue;
        };
        if normal.dot(up) < -cos_threshold {
            overhang_area += area;
        }
    }

    OverhangScan {
        overhang_area,
        total_area,
    }
}
