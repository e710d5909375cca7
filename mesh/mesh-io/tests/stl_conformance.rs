//! Conformance tests for the binary STL pipeline.

#![allow(clippy::unwrap_used)]

use mesh_io::{decode_stl, encode_stl, load_stl, save_stl, IoError};
use mesh_types::{unit_cube, MeshTopology, Point3, Vector3};

/// Build raw binary STL bytes from a list of triangles.
fn raw_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&u32::try_from(triangles.len()).unwrap().to_le_bytes());
    for tri in triangles {
        bytes.extend_from_slice(&[0u8; 12]); // normal, ignored by the reader
        for v in tri {
            for c in v {
                bytes.extend_from_slice(&c.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }
    bytes
}

#[test]
fn file_roundtrip_preserves_topology() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.stl");

    let cube = unit_cube();
    save_stl(&cube, &path).unwrap();

    let loaded = load_stl(&path).unwrap();
    assert_eq!(loaded.vertex_count(), 8);
    assert_eq!(loaded.face_count(), 12);
    assert!(loaded.is_watertight());
    assert!((loaded.volume() - 1.0).abs() < 1e-9);
    assert!((loaded.extent() - Vector3::new(1.0, 1.0, 1.0)).norm() < 1e-9);
}

#[test]
fn declared_count_governs_validation() {
    // A buffer that holds one triangle record but declares five.
    let mut bytes = raw_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
    bytes[80..84].copy_from_slice(&5u32.to_le_bytes());

    match decode_stl(&bytes) {
        Err(e @ IoError::SizeMismatch { .. }) => assert!(e.is_malformed()),
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_are_tolerated() {
    // Extra bytes past the declared triangle data do not invalidate the
    // buffer; only a shortfall does.
    let mut bytes = raw_stl(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
    bytes.extend_from_slice(&[0xAB; 16]);

    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn shared_edges_are_rebuilt_from_soup() {
    // Two triangles forming a quad share an edge; the four distinct
    // positions come out as four vertices, not six.
    let bytes = raw_stl(&[
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
        [[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    ]);

    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
}

#[test]
fn first_occurrence_wins_index_assignment() {
    let bytes = raw_stl(&[
        [[5.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 5.0, 0.0]],
        [[0.0, 5.0, 0.0], [5.0, 0.0, 0.0], [5.0, 5.0, 0.0]],
    ]);

    let mesh = decode_stl(&bytes).unwrap();
    // Vertices appear in first-seen order.
    assert_eq!(mesh.vertices[0], Point3::new(5.0, 0.0, 0.0));
    assert_eq!(mesh.vertices[1], Point3::new(0.0, 0.0, 0.0));
    assert_eq!(mesh.vertices[2], Point3::new(0.0, 5.0, 0.0));
    assert_eq!(mesh.vertices[3], Point3::new(5.0, 5.0, 0.0));
    assert_eq!(mesh.faces, vec![[0, 1, 2], [2, 0, 3]]);
}

#[test]
fn coordinates_survive_f32_widening() {
    let bytes = raw_stl(&[[[0.25, -1.5, 3.75], [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]]);
    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.vertices[0], Point3::new(0.25, -1.5, 3.75));
}
