//! Binary STL decoding and encoding.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored; recomputed from winding)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! A valid buffer holds exactly `84 + 50 * N` bytes or more; anything
//! shorter is rejected. ASCII STL is out of scope for this loader and fails
//! the same size validation.
//!
//! # Deduplication
//!
//! STL stores each triangle as a free-standing vertex soup. The decoder
//! rebuilds shared topology by mapping every incoming vertex through a
//! [`PointKey`] table: a vertex seen before reuses its first-assigned index,
//! a new one is appended. Keys are raw coordinate bits, so two coordinates
//! one ULP apart stay distinct and the same bytes always produce the same
//! mesh. Manifold queries rely on this shared indexing.

use std::path::Path;

use hashbrown::HashMap;
use tracing::debug;

use mesh_types::{normalize_or_zero, IndexedMesh, Point3, PointKey};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Load a mesh from a binary STL file.
///
/// Reads the whole file and delegates to [`decode_stl`].
///
/// # Errors
///
/// Returns an error if the file cannot be read ([`IoError::FileNotFound`],
/// [`IoError::Io`]) or its content is not valid binary STL.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let mesh = load_stl("model.stl").unwrap();
/// println!("Loaded {} faces", mesh.faces.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    decode_stl(&bytes)
}

/// Decode a binary STL buffer into a deduplicated mesh.
///
/// Coordinates are read as little-endian `f32` regardless of host
/// endianness and widened to `f64`. Faces are produced in input order; the
/// per-record normal and attribute fields are ignored.
///
/// # Errors
///
/// Returns [`IoError::BufferTooSmall`] for buffers under 84 bytes and
/// [`IoError::SizeMismatch`] when the buffer cannot hold the declared
/// triangle count.
pub fn decode_stl(bytes: &[u8]) -> IoResult<IndexedMesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(IoError::BufferTooSmall { got: bytes.len() });
    }

    let triangle_count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let expected = HEADER_SIZE + 4 + (triangle_count as usize) * TRIANGLE_SIZE;
    if bytes.len() < expected {
        return Err(IoError::SizeMismatch {
            expected,
            got: bytes.len(),
            triangles: triangle_count,
        });
    }

    let mut mesh = IndexedMesh::with_capacity(triangle_count as usize, triangle_count as usize);
    let mut dedup: HashMap<PointKey, u32> = HashMap::with_capacity(triangle_count as usize);

    let mut offset = HEADER_SIZE + 4;
    for _ in 0..triangle_count {
        // Skip the stored normal; it is recomputed from winding when needed.
        offset += 12;

        let mut indices = [0u32; 3];
        for index in &mut indices {
            let point = read_point(&bytes[offset..offset + 12]);
            offset += 12;

            // First occurrence wins: a repeated position reuses the index
            // it was first assigned.
            #[allow(clippy::cast_possible_truncation)]
            // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
            let next = mesh.vertices.len() as u32;
            *index = *dedup.entry(PointKey::new(&point)).or_insert_with(|| {
                mesh.vertices.push(point);
                next
            });
        }
        mesh.faces.push(indices);

        // Skip the attribute byte count.
        offset += 2;
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "decoded binary STL"
    );

    Ok(mesh)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Encode a mesh as a binary STL buffer.
///
/// Normals are recomputed from the face winding; degenerate faces get a
/// zero normal. The attribute field is written as 0. ASCII output is not
/// supported.
#[must_use]
pub fn encode_stl(mesh: &IndexedMesh) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + 4 + mesh.faces.len() * TRIANGLE_SIZE);

    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by meshproof mesh-io";
    header[..text.len()].copy_from_slice(text);
    out.extend_from_slice(&header);

    #[allow(clippy::cast_possible_truncation)]
    // Face count: mesh faces limited to u32 range by design
    let face_count = mesh.faces.len() as u32;
    out.extend_from_slice(&face_count.to_le_bytes());

    for &[i0, i1, i2] in &mesh.faces {
        let v0 = mesh.vertices[i0 as usize];
        let v1 = mesh.vertices[i1 as usize];
        let v2 = mesh.vertices[i2 as usize];

        let normal = normalize_or_zero((v1 - v0).cross(&(v2 - v0)));
        write_f32_triple(&mut out, normal.x, normal.y, normal.z);
        write_f32_triple(&mut out, v0.x, v0.y, v0.z);
        write_f32_triple(&mut out, v1.x, v1.y, v1.z);
        write_f32_triple(&mut out, v2.x, v2.y, v2.z);
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    out
}

/// Save a mesh to a binary STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    std::fs::write(path, encode_stl(mesh))?;
    Ok(())
}

/// Append three f64 values as little-endian f32s.
fn write_f32_triple(out: &mut Vec<u8>, x: f64, y: f64, z: f64) {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: f64 to f32 is intentional for the STL format
    {
        out.extend_from_slice(&(x as f32).to_le_bytes());
        out.extend_from_slice(&(y as f32).to_le_bytes());
        out.extend_from_slice(&(z as f32).to_le_bytes());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mesh_types::{unit_cube, MeshTopology};

    #[test]
    fn rejects_buffer_without_header() {
        let result = decode_stl(&[0u8; 40]);
        assert!(matches!(result, Err(IoError::BufferTooSmall { got: 40 })));
    }

    #[test]
    fn rejects_truncated_triangle_data() {
        // Header claims 2 triangles but only carries bytes for one.
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; TRIANGLE_SIZE]);

        let result = decode_stl(&bytes);
        match result {
            Err(IoError::SizeMismatch {
                expected,
                got,
                triangles,
            }) => {
                assert_eq!(expected, 84 + 2 * TRIANGLE_SIZE);
                assert_eq!(got, 84 + TRIANGLE_SIZE);
                assert_eq!(triangles, 2);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_stl_decodes_to_empty_mesh() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let mesh = decode_stl(&bytes).unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn cube_roundtrip_deduplicates_soup() {
        // encode_stl flattens the cube to a 36-vertex soup; decoding must
        // fold it back to the 8 shared corners.
        let cube = unit_cube();
        let bytes = encode_stl(&cube);
        assert_eq!(bytes.len(), 84 + 12 * TRIANGLE_SIZE);

        let decoded = decode_stl(&bytes).unwrap();
        assert_eq!(decoded.vertex_count(), 8);
        assert_eq!(decoded.face_count(), 12);
        assert!(decoded.is_watertight());
        assert!((decoded.volume() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dedup_is_idempotent_across_loads() {
        let bytes = encode_stl(&unit_cube());
        let first = decode_stl(&bytes).unwrap();
        let second = decode_stl(&bytes).unwrap();

        assert_eq!(first.vertex_count(), second.vertex_count());
        assert_eq!(first.faces, second.faces);
    }

    #[test]
    fn one_ulp_apart_stays_distinct() {
        // Two triangles sharing two corners; the third corners differ by a
        // single f32 ULP and must not be merged.
        let a = 0.3_f32;
        let b = f32::from_bits(a.to_bits() + 1);

        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes.extend_from_slice(&2u32.to_le_bytes());
        for third in [a, b] {
            bytes.extend_from_slice(&[0u8; 12]); // normal
            for [x, y, z] in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [third, 1.0, 0.0]] {
                bytes.extend_from_slice(&x.to_le_bytes());
                bytes.extend_from_slice(&y.to_le_bytes());
                bytes.extend_from_slice(&z.to_le_bytes());
            }
            bytes.extend_from_slice(&0u16.to_le_bytes());
        }

        let mesh = decode_stl(&bytes).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 1, 3]]);
    }

    #[test]
    fn faces_keep_input_order() {
        let cube = unit_cube();
        let decoded = decode_stl(&encode_stl(&cube)).unwrap();
        // First decoded face is the first encoded face; the cube's first
        // face is the bottom triangle whose normal points -Z.
        let tri = decoded.triangle(0).unwrap();
        let n = tri.normal().unwrap();
        assert!((n.z + 1.0).abs() < 1e-9);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("nonexistent_file_12345.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
