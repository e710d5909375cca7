//! Axis-angle rotations.

use nalgebra::{Rotation3, Unit, Vector3};

use crate::error::GeometryError;
use crate::point::DEGENERATE_LENGTH;

/// Build a rotation of `angle` radians about `axis`.
///
/// The axis does not need to be unit length; it is normalized first. The
/// result is a proper rotation matrix (Rodrigues form), so its transpose is
/// its inverse.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidAxis`] when the axis is too short to
/// define a direction.
///
/// # Example
///
/// ```
/// use mesh_types::{rotation_about, Vector3};
///
/// // Quarter turn about Z maps +X onto +Y.
/// let r = rotation_about(Vector3::z(), std::f64::consts::FRAC_PI_2).unwrap();
/// let v = r * Vector3::x();
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
pub fn rotation_about(axis: Vector3<f64>, angle: f64) -> Result<Rotation3<f64>, GeometryError> {
    let axis = Unit::try_new(axis, DEGENERATE_LENGTH).ok_or(GeometryError::InvalidAxis)?;
    Ok(Rotation3::from_axis_angle(&axis, angle))
}
