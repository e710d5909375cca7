//! Spatial acceleration for meshproof.
//!
//! This crate provides ray queries against triangle meshes:
//!
//! - [`Ray`] / [`RayHit`] - query primitives
//! - [`ray_aabb`] - slab-method ray-box intersection
//! - [`ray_triangle`] - Möller–Trumbore ray-triangle intersection
//! - [`Bvh`] - a median-split bounding-volume hierarchy
//!
//! # Ownership
//!
//! A [`Bvh`] stores triangle indices, not geometry. Queries take the mesh
//! the tree was built from, and the tree must be rebuilt whenever that mesh
//! is replaced. The analyzer pairs the two so the tree cannot outlive its
//! mesh.
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
//! use mesh_types::unit_cube;
//! use mp_spatial::{Bvh, Ray};
//! use nalgebra::{Point3, Vector3};
//!
//! let cube = unit_cube();
//! let bvh = Bvh::build(&cube);
//!
//! let ray = Ray::new(Point3::new(0.5, 0.5, 5.0), Vector3::new(0.0, 0.0, -1.0));
//! let hit = bvh.ray_cast(&cube, &ray, f64::MAX);
//! assert!(hit.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bvh;
mod ray;

pub use bvh::{ray_cast_brute_force, Bvh};
pub use ray::{ray_aabb, ray_triangle, Ray, RayHit};
