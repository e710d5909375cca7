//! Wall-thickness probing by inward ray casting.
//!
//! For each sampled vertex the probe casts a ray from just outside the
//! surface back through it along the inward normal; a surface hit closer
//! than the thickness threshold means the local wall is too thin. The
//! vertex's own one-ring is excluded from the cast so the probe measures
//! the opposite wall, not the surface it starts on. Concave pockets and
//! walls counted from both sides are accepted limitations of the slab
//! measurement.

use mesh_types::{normalize_or_zero, IndexedMesh, MeshTopology, Vector3};
use mp_spatial::{Bvh, Ray};

/// Vertex count beyond which the probe strides the vertex array.
const SAMPLE_STRIDE_CUTOFF: usize = 10_000;

/// Stride used for meshes above [`SAMPLE_STRIDE_CUTOFF`].
const LARGE_MESH_STRIDE: usize = 10;

/// Offset along the outward normal for the ray origin.
const SELF_INTERSECTION_OFFSET: f64 = 1e-3;

/// Ray search range as a multiple of the thickness threshold.
const SEARCH_RANGE_FACTOR: f64 = 10.0;

/// Count sampled vertices whose local wall is thinner than `min_thickness`.
///
/// Samples every vertex for meshes up to 10 000 vertices and every tenth
/// vertex beyond that. Each sampled vertex casts a ray from `v + ε·n̂`
/// along `−n̂` (ε = 1e-3), searching up to `10 × min_thickness` and
/// ignoring the vertex's incident faces; a hit closer than `min_thickness`
/// counts the vertex as thin. Vertices with no incident faces are skipped.
///
/// `bvh` must be the spatial index of `mesh`.
#[must_use]
pub fn thin_wall_count(mesh: &IndexedMesh, bvh: &Bvh, min_thickness: f64) -> usize {
    let stride = if mesh.vertex_count() > SAMPLE_STRIDE_CUTOFF {
        LARGE_MESH_STRIDE
    } else {
        1
    };

    let normals = vertex_normals(mesh);
    let vertex_faces = vertex_face_adjacency(mesh);
    let mut thin = 0;

    let mut index = 0;
    while index < mesh.vertices.len() {
        let normal = normals[index];
        // The zero vector marks a vertex with no incident faces.
        if normal != Vector3::zeros() {
            let origin = mesh.vertices[index] + normal * SELF_INTERSECTION_OFFSET;
            let ray = Ray::new(origin, -normal);
            let one_ring = &vertex_faces[index];

            let hit = bvh.ray_cast_filtered(
                mesh,
                &ray,
                min_thickness * SEARCH_RANGE_FACTOR,
                |face| !one_ring.contains(&face),
            );

            if let Some(hit) = hit {
                if hit.distance < min_thickness {
                    thin += 1;
                }
            }
        }
        index += stride;
    }

    thin
}

/// Per-vertex unit normals from one pass over the faces.
///
/// Each vertex accumulates the unit normals of its incident faces (its
/// one-ring) and the sum is normalized. Vertices with no incident faces,
/// and vertices whose incident normals cancel exactly, end up with the
/// zero vector.
#[must_use]
pub fn vertex_normals(mesh: &IndexedMesh) -> Vec<Vector3<f64>> {
    let mut normals = vec![Vector3::zeros(); mesh.vertex_count()];

    for (face, tri) in mesh.faces.iter().zip(mesh.triangles()) {
        let Some(face_normal) = tri.normal() else {
            continue;
        };
        for &vertex_index in face {
            normals[vertex_index as usize] += face_normal;
        }
    }

    for normal in &mut normals {
        *normal = normalize_or_zero(*normal);
    }

    normals
}

/// Faces incident to each vertex.
fn vertex_face_adjacency(mesh: &IndexedMesh) -> Vec<Vec<usize>> {
    let mut vertex_faces = vec![Vec::new(); mesh.vertex_count()];
    for (face_index, face) in mesh.faces.iter().enumerate() {
        for &vertex_index in face {
            vertex_faces[vertex_index as usize].push(face_index);
        }
    }
    vertex_faces
}
