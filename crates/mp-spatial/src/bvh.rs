//! Axis-aligned bounding-volume hierarchy over mesh triangles.
//!
//! The tree stores triangle *indices* only; every query takes a reference
//! to the mesh the tree was built from. The owner is expected to pair tree
//! and mesh (the analyzer does), so the tree can never outlive or drift
//! from its source geometry.

use mesh_types::{normalize_or_zero, Aabb, IndexedMesh, MeshTopology, Triangle};

use crate::ray::{ray_aabb, ray_triangle, Ray, RayHit};

/// Maximum triangles a leaf may hold before it is split.
const MAX_LEAF_TRIANGLES: usize = 10;

/// Maximum tree depth; a node at this depth becomes a leaf regardless of
/// its triangle count. Bounds build/query recursion well within stack
/// limits on all targets.
const MAX_DEPTH: usize = 32;

/// Hits closer than this along the ray are discarded as self-intersections.
const MIN_HIT_DISTANCE: f64 = 1e-6;

#[derive(Debug)]
enum Node {
    Leaf {
        bounds: Aabb,
        triangles: Vec<u32>,
    },
    Inner {
        bounds: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    const fn bounds(&self) -> &Aabb {
        match self {
            Self::Leaf { bounds, .. } | Self::Inner { bounds, .. } => bounds,
        }
    }
}

/// A binary BVH with median splits along the longest axis.
///
/// Build is `O(N log² N)` (per-level centroid sort); queries are expected
/// `O(log N)` for typical meshes. Every triangle of the source mesh appears
/// in exactly one leaf.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mp_spatial::{Bvh, Ray};
/// use nalgebra::{Point3, Vector3};
///
/// let cube = unit_cube();
/// let bvh = Bvh::build(&cube);
/// assert!(bvh.is_built());
///
/// let ray = Ray::new(Point3::new(0.5, 0.5, 5.0), Vector3::new(0.0, 0.0, -1.0));
/// let hit = bvh.ray_cast(&cube, &ray, f64::MAX).unwrap();
/// assert!((hit.distance - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Default)]
pub struct Bvh {
    root: Option<Box<Node>>,
}

impl Bvh {
    /// Build a BVH over all triangles of `mesh`.
    ///
    /// A mesh with no faces produces an unbuilt tree whose queries all
    /// miss. The tree must be queried with the mesh it was built from and
    /// rebuilt whenever the mesh is replaced.
    #[must_use]
    pub fn build(mesh: &IndexedMesh) -> Self {
        if mesh.face_count() == 0 {
            return Self { root: None };
        }

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: mesh indices are u32, meshes with >4B faces are unsupported
        let mut indices: Vec<u32> = (0..mesh.face_count() as u32).collect();
        let root = build_node(mesh, &mut indices, 0);
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Check if the tree has a root.
    #[inline]
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// Cast a ray and return the closest hit within `max_distance`.
    ///
    /// `mesh` must be the mesh this tree was built from. The closest
    /// intersection wins; on exactly equal parameters the first one found
    /// in storage order is kept. Returns `None` on a miss or when the tree
    /// is unbuilt.
    #[must_use]
    pub fn ray_cast(&self, mesh: &IndexedMesh, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        self.ray_cast_filtered(mesh, ray, max_distance, |_| true)
    }

    /// Cast a ray, considering only triangles accepted by `accept`.
    ///
    /// The predicate receives the triangle index. The thickness probe uses
    /// this to exclude a vertex's own one-ring from its measurement.
    #[must_use]
    pub fn ray_cast_filtered<F>(
        &self,
        mesh: &IndexedMesh,
        ray: &Ray,
        max_distance: f64,
        accept: F,
    ) -> Option<RayHit>
    where
        F: Fn(usize) -> bool,
    {
        let root = self.root.as_deref()?;
        let mut best: Option<RayHit> = None;
        cast_node(root, mesh, ray, max_distance, &accept, &mut best);
        best
    }
}

/// Recursively build the subtree for `indices` at the given depth.
fn build_node(mesh: &IndexedMesh, indices: &mut [u32], depth: usize) -> Node {
    let bounds = triangle_bounds(mesh, indices);

    if indices.len() <= MAX_LEAF_TRIANGLES || depth >= MAX_DEPTH {
        return Node::Leaf {
            bounds,
            triangles: indices.to_vec(),
        };
    }

    let axis = bounds.longest_axis();
    indices.sort_by(|&a, &b| {
        centroid_along(mesh, a, axis).total_cmp(&centroid_along(mesh, b, axis))
    });

    let mid = indices.len() / 2;
    let (left_indices, right_indices) = indices.split_at_mut(mid);

    Node::Inner {
        bounds,
        left: Box::new(build_node(mesh, left_indices, depth + 1)),
        right: Box::new(build_node(mesh, right_indices, depth + 1)),
    }
}

/// Compute the AABB over the vertices of the given triangles.
fn triangle_bounds(mesh: &IndexedMesh, indices: &[u32]) -> Aabb {
    let mut bounds = Aabb::empty();
    for &tri in indices {
        for i in mesh.faces[tri as usize] {
            bounds.expand_to_include(&mesh.vertices[i as usize]);
        }
    }
    bounds
}

/// Centroid coordinate of a triangle along one axis.
fn centroid_along(mesh: &IndexedMesh, tri: u32, axis: usize) -> f64 {
    let [i0, i1, i2] = mesh.faces[tri as usize];
    (mesh.vertices[i0 as usize][axis]
        + mesh.vertices[i1 as usize][axis]
        + mesh.vertices[i2 as usize][axis])
        / 3.0
}

/// Depth-first traversal with pruning against the best hit so far.
fn cast_node<F>(
    node: &Node,
    mesh: &IndexedMesh,
    ray: &Ray,
    max_distance: f64,
    accept: &F,
    best: &mut Option<RayHit>,
) where
    F: Fn(usize) -> bool,
{
    let Some((t_entry, _)) = ray_aabb(ray, node.bounds()) else {
        return;
    };

    let best_distance = best.as_ref().map_or(f64::MAX, |hit| hit.distance);
    if t_entry > max_distance || t_entry > best_distance {
        return;
    }

    match node {
        Node::Leaf { triangles, .. } => {
            for &tri in triangles {
                if !accept(tri as usize) {
                    continue;
                }
                let [i0, i1, i2] = mesh.faces[tri as usize];
                let v0 = mesh.vertices[i0 as usize];
                let v1 = mesh.vertices[i1 as usize];
                let v2 = mesh.vertices[i2 as usize];

                if let Some(t) = ray_triangle(ray, &v0, &v1, &v2) {
                    let best_distance = best.as_ref().map_or(f64::MAX, |hit| hit.distance);
                    if t < best_distance && t < max_distance && t > MIN_HIT_DISTANCE {
                        *best = Some(RayHit {
                            distance: t,
                            triangle_index: tri as usize,
                            point: ray.point_at(t),
                            normal: normalize_or_zero(
                                Triangle::new(v0, v1, v2).normal_unnormalized(),
                            ),
                        });
                    }
                }
            }
        }
        Node::Inner { left, right, .. } => {
            // Children are visited in storage order; the pruning test above
            // cuts the worse branch once the first one improves the bound.
            cast_node(left, mesh, ray, max_distance, accept, best);
            cast_node(right, mesh, ray, max_distance, accept, best);
        }
    }
}

/// Closest hit by brute force over every face, bypassing the tree.
///
/// Reference implementation for validating BVH results in tests.
#[must_use]
pub fn ray_cast_brute_force(mesh: &IndexedMesh, ray: &Ray, max_distance: f64) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;

    for (tri, &[i0, i1, i2]) in mesh.faces.iter().enumerate() {
        let v0 = mesh.vertices[i0 as usize];
        let v1 = mesh.vertices[i1 as usize];
        let v2 = mesh.vertices[i2 as usize];

        if let Some(t) = ray_triangle(ray, &v0, &v1, &v2) {
            let best_distance = best.as_ref().map_or(f64::MAX, |hit| hit.distance);
            if t < best_distance && t < max_distance && t > MIN_HIT_DISTANCE {
                best = Some(RayHit {
                    distance: t,
                    triangle_index: tri,
                    point: ray.point_at(t),
                    normal: normalize_or_zero(Triangle::new(v0, v1, v2).normal_unnormalized()),
                });
            }
        }
    }

    best
}
