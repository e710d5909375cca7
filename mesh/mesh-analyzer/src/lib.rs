//! 3D-printability analysis for triangle meshes.
//!
//! This crate is the top of the meshproof kernel: it owns a mesh loaded
//! through `mesh-io`, an optional spatial index from `mp-spatial`, and the
//! analyses layered on top:
//!
//! - **Overhang scan** - classify faces whose normals point too far below
//!   horizontal for a chosen up vector
//! - **Wall-thickness probe** - per-vertex inward ray casts against the
//!   spatial index
//! - **Printability report** - overhang and thin-wall figures folded into
//!   a 0-100 score
//! - **Auto-orientation** - search 26 candidate up vectors for the one
//!   minimizing overhang area
//!
//! The [`Analyzer`] façade ties these together with total query semantics:
//! load operations surface errors, queries never do (an empty mesh yields
//! identity values and a logged diagnostic).
//!
//! All operations are synchronous and single-threaded; a browser embedding
//! is expected to run the analyzer inside a worker.
//!
//! # Example
//!
//! ```
//! use mesh_analyzer::Analyzer;
//! use mesh_io::encode_stl;
//! use mesh_types::unit_cube;
//!
//! let mut analyzer = Analyzer::new();
//! analyzer.load_stl_from_bytes(&encode_stl(&unit_cube())).unwrap();
//! analyzer.build_spatial_index();
//!
//! let report = analyzer.printability_report(45.0, 0.8);
//! println!("score: {:.1}/100", report.score);
//!
//! let orientation = analyzer.auto_orient(26, 45.0);
//! println!("best up vector: {}", orientation.optimal_up_vector);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod analyzer;
mod orientation;
mod overhang;
mod report;
mod thickness;

pub use analyzer::Analyzer;
pub use orientation::{candidate_up_vectors, find_best_orientation};
pub use overhang::analyze_overhangs;
pub use report::{OrientationResult, OverhangScan, PrintabilityReport};
pub use thickness::{thin_wall_count, vertex_normals};

// Re-export the error type load operations surface
pub use mesh_io::{IoError, IoResult};
