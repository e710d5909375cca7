//! Indexed triangle mesh.

use hashbrown::HashMap;
use nalgebra::{Point3, Rotation3, Vector3};

use crate::{Aabb, MeshBounds, MeshTopology, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// The primary mesh type for meshproof. Vertices and faces are stored
/// separately, with faces referencing vertices by index.
///
/// # Invariants
///
/// Meshes produced by the STL loader satisfy:
/// - every face index is in `[0, vertex_count)`;
/// - no two vertices are closer than the dedup tolerance;
/// - faces keep the winding of the source file (no re-orientation).
///
/// Meshes are immutable after load apart from rigid motions
/// ([`translate`](Self::translate), [`rotate`](Self::rotate)); replacing the
/// geometry means loading a new mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Point3};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Sum of signed tetrahedron volumes `v0 · (v1 × v2) / 6` formed by each
    /// face and the origin. For a closed mesh the result is independent of
    /// where the origin sits; positive means outward-facing normals.
    ///
    /// For open meshes the result is not meaningful as a volume.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = self.vertices[i0 as usize].coords;
            let v1 = self.vertices[i1 as usize].coords;
            let v2 = self.vertices[i2 as usize].coords;
            volume += v0.dot(&v1.cross(&v2));
        }

        volume / 6.0
    }

    /// Compute the enclosed volume of the mesh.
    ///
    /// Absolute value of [`signed_volume`](Self::signed_volume); units are
    /// input coordinates cubed. Returns 0 for an empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::unit_cube;
    ///
    /// assert!((unit_cube().volume() - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Check whether the mesh is watertight (2-manifold).
    ///
    /// Counts every undirected edge over all faces. The mesh is watertight
    /// iff every edge is shared by exactly two faces. Boundary edges
    /// (count 1) and non-manifold edges (count ≥ 3) both fail the check.
    /// An empty mesh is not watertight.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::unit_cube;
    ///
    /// assert!(unit_cube().is_watertight());
    /// ```
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }

        let mut edge_counts: HashMap<(u32, u32), u32> =
            HashMap::with_capacity(self.faces.len() * 3 / 2);

        for &[i0, i1, i2] in &self.faces {
            for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
                let edge = if a < b { (a, b) } else { (b, a) };
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }

        edge_counts.values().all(|&count| count == 2)
    }

    /// Get the extent of the vertex cloud (`max − min` per axis).
    ///
    /// Returns the zero vector for an empty mesh. The corner points
    /// themselves are available through [`MeshBounds::bounds`].
    #[must_use]
    pub fn extent(&self) -> Vector3<f64> {
        let bounds = self.bounds();
        if bounds.is_empty() {
            Vector3::zeros()
        } else {
            bounds.size()
        }
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Translate all vertices by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Rotate all vertices about the origin.
    pub fn rotate(&mut self, rotation: &Rotation3<f64>) {
        for vertex in &mut self.vertices {
            *vertex = rotation * *vertex;
        }
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Point3<f64>> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) with outward-facing normals,
/// 8 vertices, and 12 triangles.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    mesh.vertices.push(Point3::new(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Point3::new(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Point3::new(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Point3::new(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Point3::new(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Point3::new(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Point3::new(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Point3::new(0.0, 1.0, 1.0)); // 7

    // Bottom (z=0), normal -Z
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);

    // Top (z=1), normal +Z
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);

    // Front (y=0), normal -Y
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);

    // Back (y=1), normal +Y
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);

    // Left (x=0), normal -X
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);

    // Right (x=1), normal +X
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation_about;
    use approx::assert_relative_eq;

    #[test]
    fn empty_mesh_identities() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.volume().abs() < f64::EPSILON);
        assert!(!mesh.is_watertight());
        assert_eq!(mesh.extent(), Vector3::zeros());
        assert!(mesh.surface_area().abs() < f64::EPSILON);
    }

    #[test]
    fn unit_cube_volume_and_area() {
        let cube = unit_cube();
        assert_relative_eq!(cube.signed_volume(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(cube.volume(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(cube.surface_area(), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn unit_cube_is_watertight() {
        assert!(unit_cube().is_watertight());
    }

    #[test]
    fn open_box_is_not_watertight() {
        // Remove the top faces: boundary edges appear with count 1.
        let mut cube = unit_cube();
        cube.faces.remove(3);
        cube.faces.remove(2);
        assert!(!cube.is_watertight());
    }

    #[test]
    fn doubled_face_is_not_watertight() {
        // Duplicating a face makes its edges non-manifold (count >= 3).
        let mut cube = unit_cube();
        cube.faces.push(cube.faces[0]);
        assert!(!cube.is_watertight());
    }

    #[test]
    fn extent_of_unit_cube() {
        let cube = unit_cube();
        assert_relative_eq!(cube.extent(), Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn volume_invariant_under_translation() {
        let mut cube = unit_cube();
        cube.translate(Vector3::new(100.0, -40.0, 7.5));
        assert_relative_eq!(cube.volume(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn volume_invariant_under_rotation() {
        let mut cube = unit_cube();
        let Ok(rotation) = rotation_about(Vector3::new(1.0, 1.0, 0.5), 0.83) else {
            panic!("rotation should build");
        };
        cube.rotate(&rotation);
        cube.translate(Vector3::new(3.0, 2.0, 1.0));
        assert_relative_eq!(cube.volume(), 1.0, max_relative = 1e-6);
        assert!(cube.is_watertight());
    }

    #[test]
    fn triangle_accessor_resolves_positions() {
        let cube = unit_cube();
        let tri = cube.triangle(0);
        assert!(tri.is_some());
        assert!(cube.triangle(12).is_none());
    }

    #[test]
    fn face_iteration_matches_storage_order() {
        let cube = unit_cube();
        let collected: Vec<[u32; 3]> = cube.faces().collect();
        assert_eq!(collected, cube.faces);
    }
}
