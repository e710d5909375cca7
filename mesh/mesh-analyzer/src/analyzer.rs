//! The analysis façade: one mesh, one spatial index, and the queries
//! layered over them.

use std::path::Path;

use tracing::{info, warn};

use mesh_io::IoResult;
use mesh_types::{IndexedMesh, MeshTopology, Vector3};
use mp_spatial::{Bvh, Ray, RayHit};

use crate::orientation::find_best_orientation;
use crate::overhang::analyze_overhangs;
use crate::report::{OrientationResult, OverhangScan, PrintabilityReport};
use crate::thickness::thin_wall_count;

/// Score points lost per percent of overhang area.
const OVERHANG_PENALTY_PER_PERCENT: f64 = 0.5;

/// Score points lost per unit of thin-wall vertex ratio.
const THIN_WALL_PENALTY_FACTOR: f64 = 50.0;

/// Cap on each of the two penalties.
const MAX_PENALTY: f64 = 50.0;

/// Mesh analysis façade owning one mesh and, optionally, its spatial index.
///
/// An `Analyzer` moves through three states: empty, loaded, and indexed.
/// Loading replaces the mesh and drops any index; a failed load leaves the
/// previous state untouched. Queries are total: on an empty mesh they
/// return identity values (0, `false`, the zero vector, the default
/// report) and log a diagnostic rather than erroring.
///
/// Analyzers share no state with each other; for concurrent use, confine
/// each instance to its owning thread.
///
/// # Example
///
/// ```
/// use mesh_analyzer::Analyzer;
/// use mesh_io::encode_stl;
/// use mesh_types::unit_cube;
///
/// let mut analyzer = Analyzer::new();
/// analyzer.load_stl_from_bytes(&encode_stl(&unit_cube())).unwrap();
/// analyzer.build_spatial_index();
///
/// assert_eq!(analyzer.vertex_count(), 8);
/// assert!(analyzer.is_watertight());
///
/// let report = analyzer.printability_report(45.0, 0.8);
/// assert!(report.score >= 0.0 && report.score <= 100.0);
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    mesh: IndexedMesh,
    index: Option<Bvh>,
}

impl Analyzer {
    /// Create an analyzer with no mesh loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a binary STL file, replacing any current mesh.
    ///
    /// # Errors
    ///
    /// Returns the I/O or decode error; the previously loaded mesh and
    /// index remain in place on failure.
    pub fn load_stl_from_path<P: AsRef<Path>>(&mut self, path: P) -> IoResult<()> {
        let mesh = mesh_io::load_stl(path)?;
        self.install(mesh);
        Ok(())
    }

    /// Load binary STL bytes, replacing any current mesh.
    ///
    /// # Errors
    ///
    /// Returns the decode error; the previously loaded mesh and index
    /// remain in place on failure.
    pub fn load_stl_from_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        let mesh = mesh_io::decode_stl(bytes)?;
        self.install(mesh);
        Ok(())
    }

    fn install(&mut self, mesh: IndexedMesh) {
        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.face_count(),
            "mesh loaded"
        );
        self.index = None;
        self.mesh = mesh;
    }

    /// The currently loaded mesh (empty before the first load).
    #[must_use]
    pub const fn mesh(&self) -> &IndexedMesh {
        &self.mesh
    }

    /// Number of (deduplicated) vertices in the current mesh.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Number of triangles in the current mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// Enclosed volume of the current mesh (0 when empty).
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.mesh.volume()
    }

    /// Whether the current mesh is watertight (`false` when empty).
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.mesh.is_watertight()
    }

    /// Bounding-box extent of the current mesh (zero vector when empty).
    #[must_use]
    pub fn bounding_box(&self) -> Vector3<f64> {
        self.mesh.extent()
    }

    /// Build the spatial index over the current mesh.
    ///
    /// Required for the wall-thickness part of the printability report.
    /// On an empty mesh this logs a warning and leaves the analyzer
    /// unindexed.
    pub fn build_spatial_index(&mut self) {
        if self.mesh.vertex_count() == 0 {
            warn!("cannot build spatial index: no mesh loaded");
            return;
        }

        self.index = Some(Bvh::build(&self.mesh));
        info!(
            triangles = self.mesh.face_count(),
            "spatial index built"
        );
    }

    /// Whether a spatial index is available for the current mesh.
    #[must_use]
    pub const fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Cast a ray against the indexed mesh.
    ///
    /// Returns `None` on a miss or when no spatial index has been built.
    #[must_use]
    pub fn ray_cast(&self, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        self.index
            .as_ref()
            .and_then(|bvh| bvh.ray_cast(&self.mesh, ray, max_distance))
    }

    /// Scan the mesh for overhangs relative to an arbitrary up vector.
    #[must_use]
    pub fn analyze_overhangs(&self, up: &Vector3<f64>, critical_angle_deg: f64) -> OverhangScan {
        analyze_overhangs(&self.mesh, up, critical_angle_deg)
    }

    /// Produce a printability report for Z-up printing.
    ///
    /// Runs the overhang scan, then the wall-thickness probe when a
    /// spatial index is available. Without an index the thin-wall count is
    /// reported as 0 and a warning is logged. The score starts at 100 and
    /// loses up to 50 points each for the overhang percentage (0.5 per
    /// percent) and the thin-wall vertex ratio (50 per unit).
    #[must_use]
    pub fn printability_report(
        &self,
        critical_angle_deg: f64,
        min_wall_thickness: f64,
    ) -> PrintabilityReport {
        if self.mesh.vertex_count() == 0 {
            warn!("printability report requested with no mesh loaded");
            return PrintabilityReport::default();
        }

        let scan = analyze_overhangs(&self.mesh, &Vector3::z(), critical_angle_deg);
        let overhang_percentage = scan.overhang_percentage();

        let thin_wall_vertex_count = match &self.index {
            Some(bvh) => thin_wall_count(&self.mesh, bvh, min_wall_thickness),
            None => {
                warn!("spatial index not built, skipping wall thickness analysis");
                0
            }
        };

        let mut score = 100.0;
        score -= (overhang_percentage * OVERHANG_PENALTY_PER_PERCENT).min(MAX_PENALTY);

        #[allow(clippy::cast_precision_loss)]
        let thin_wall_ratio = thin_wall_vertex_count as f64 / self.mesh.vertex_count() as f64;
        score -= (thin_wall_ratio * THIN_WALL_PENALTY_FACTOR).min(MAX_PENALTY);

        PrintabilityReport {
            overhang_area: scan.overhang_area,
            overhang_percentage,
            thin_wall_vertex_count,
            score: score.clamp(0.0, 100.0),
            total_surface_area: scan.total_area,
        }
    }

    /// Search the fixed candidate set for the up vector minimizing
    /// overhang area.
    ///
    /// `resolution` caps the number of candidates evaluated (pass 26 for
    /// the full set). The mesh itself is never rotated. On an empty mesh
    /// this logs a warning and returns the Z-up baseline result.
    #[must_use]
    pub fn auto_orient(&self, resolution: usize, critical_angle_deg: f64) -> OrientationResult {
        if self.mesh.vertex_count() == 0 {
            warn!("auto-orientation requested with no mesh loaded");
            return OrientationResult::default();
        }

        find_best_orientation(&self.mesh, resolution, critical_angle_deg)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mesh_io::encode_stl;
    use mesh_types::{unit_cube, Point3};

    fn loaded_analyzer() -> Analyzer {
        let mut analyzer = Analyzer::new();
        analyzer
            .load_stl_from_bytes(&encode_stl(&unit_cube()))
            .unwrap();
        analyzer
    }

    #[test]
    fn empty_analyzer_returns_identity_values() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.vertex_count(), 0);
        assert_eq!(analyzer.triangle_count(), 0);
        assert!(analyzer.volume().abs() < f64::EPSILON);
        assert!(!analyzer.is_watertight());
        assert_eq!(analyzer.bounding_box(), Vector3::zeros());
        assert!(!analyzer.is_indexed());
        assert_eq!(analyzer.printability_report(45.0, 0.8), PrintabilityReport::default());
    }

    #[test]
    fn ray_cast_without_index_misses() {
        let analyzer = loaded_analyzer();
        let ray = Ray::new(Point3::new(0.5, 0.5, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(analyzer.ray_cast(&ray, f64::MAX).is_none());
    }

    #[test]
    fn ray_cast_after_indexing_hits() {
        let mut analyzer = loaded_analyzer();
        analyzer.build_spatial_index();
        assert!(analyzer.is_indexed());

        let ray = Ray::new(Point3::new(0.5, 0.5, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = analyzer.ray_cast(&ray, f64::MAX).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-9);
    }

    #[test]
    fn build_index_on_empty_analyzer_is_a_noop() {
        let mut analyzer = Analyzer::new();
        analyzer.build_spatial_index();
        assert!(!analyzer.is_indexed());
    }

    #[test]
    fn loading_invalidates_the_index() {
        let mut analyzer = loaded_analyzer();
        analyzer.build_spatial_index();
        assert!(analyzer.is_indexed());

        analyzer
            .load_stl_from_bytes(&encode_stl(&unit_cube()))
            .unwrap();
        assert!(!analyzer.is_indexed());
    }

    #[test]
    fn failed_load_preserves_previous_mesh_and_index() {
        let mut analyzer = loaded_analyzer();
        analyzer.build_spatial_index();

        let result = analyzer.load_stl_from_bytes(&[0u8; 10]);
        assert!(result.is_err());
        assert_eq!(analyzer.vertex_count(), 8);
        assert!(analyzer.is_indexed());
    }

    #[test]
    fn cube_report_without_index_skips_thin_walls() {
        let analyzer = loaded_analyzer();
        let report = analyzer.printability_report(45.0, 0.8);

        assert_eq!(report.thin_wall_vertex_count, 0);
        // The cube's bottom is 1/6 of the surface: 16.67% overhang.
        assert!((report.overhang_percentage - 100.0 / 6.0).abs() < 1e-9);
        assert!((report.score - (100.0 - 100.0 / 6.0 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn score_is_always_within_bounds() {
        let mut analyzer = loaded_analyzer();
        analyzer.build_spatial_index();

        for angle in [5.0, 45.0, 85.0] {
            for wall in [0.1, 0.8, 5.0] {
                let report = analyzer.printability_report(angle, wall);
                assert!(report.score >= 0.0 && report.score <= 100.0);
            }
        }
    }
}
