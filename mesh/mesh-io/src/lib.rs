//! Mesh file I/O for meshproof.
//!
//! This crate loads and saves triangle meshes in **binary STL**, the
//! interchange format the analysis kernel ingests. Loading runs the vertex
//! deduplication pipeline that turns STL's per-triangle vertex soup into an
//! indexed mesh with shared topology, which the manifold and volume queries
//! depend on.
//!
//! ASCII STL is a non-goal: the writer always emits binary, and the reader
//! rejects anything that fails the binary size validation.
//!
//! # Layer 0 Crate
//!
//! This crate has no framework dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Foreign-language bindings
//!
//! # Example
//!
//! ```
//! use mesh_io::{decode_stl, encode_stl};
//! use mesh_types::{unit_cube, MeshTopology};
//!
//! let bytes = encode_stl(&unit_cube());
//! let mesh = decode_stl(&bytes).unwrap();
//!
//! // The 36-vertex triangle soup dedups back to 8 shared corners.
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{decode_stl, encode_stl, load_stl, save_stl};
