//! Error types for geometric constructions.

use thiserror::Error;

/// Errors that can occur when constructing geometric primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Rotation axis is too short to define a direction.
    #[error("rotation axis has near-zero length")]
    InvalidAxis,
}
