//! Core geometry types for meshproof.
//!
//! This crate provides the foundational types for mesh analysis:
//!
//! - [`IndexedMesh`] - A triangle mesh with indexed, deduplicated vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`PointKey`] - Bit-exact vertex identity for deduplication
//! - [`rotation_about`] - Axis-angle rotations for rigid motions
//!
//! # Layer 0 Crate
//!
//! This crate has no framework dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Foreign-language bindings
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. The
//! printability layer assumes millimeters.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** with Z as the default "up"
//! direction. Face winding encodes the outward normal by the right-hand
//! rule; meshes keep the winding of the file they were loaded from.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Point3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod mesh;
mod point;
mod rotate;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use error::GeometryError;
pub use mesh::{unit_cube, IndexedMesh};
pub use point::{
    lex_cmp, normalize_or_zero, points_approx_eq, PointKey, DEGENERATE_LENGTH, POINT_EPSILON,
};
pub use rotate::rotation_about;
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Rotation3, Vector3};
