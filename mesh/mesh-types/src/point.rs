//! Point comparison, ordering, and deduplication keys.

use std::cmp::Ordering;

use nalgebra::{Point3, Vector3};

/// Per-component tolerance for approximate point equality.
pub const POINT_EPSILON: f64 = 1e-9;

/// Length below which a direction is treated as degenerate.
pub const DEGENERATE_LENGTH: f64 = 1e-10;

/// Check two points for equality within [`POINT_EPSILON`] per component.
///
/// # Example
///
/// ```
/// use mesh_types::{points_approx_eq, Point3};
///
/// let a = Point3::new(1.0, 2.0, 3.0);
/// let b = Point3::new(1.0 + 1e-12, 2.0, 3.0);
/// assert!(points_approx_eq(&a, &b));
/// ```
#[inline]
#[must_use]
pub fn points_approx_eq(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a.x - b.x).abs() < POINT_EPSILON
        && (a.y - b.y).abs() < POINT_EPSILON
        && (a.z - b.z).abs() < POINT_EPSILON
}

/// Lexicographic total order over coordinates (x, then y, then z).
///
/// NaN coordinates are excluded by contract; every finite value compares
/// the way `<` does.
#[inline]
#[must_use]
pub fn lex_cmp(a: &Point3<f64>, b: &Point3<f64>) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

/// Normalize a vector, returning the zero vector for near-zero input.
///
/// # Example
///
/// ```
/// use mesh_types::{normalize_or_zero, Vector3};
///
/// let n = normalize_or_zero(Vector3::new(3.0, 4.0, 0.0));
/// assert!((n.norm() - 1.0).abs() < 1e-12);
///
/// let zero = normalize_or_zero(Vector3::zeros());
/// assert_eq!(zero, Vector3::zeros());
/// ```
#[inline]
#[must_use]
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let len = v.norm();
    if len < DEGENERATE_LENGTH {
        Vector3::zeros()
    } else {
        v / len
    }
}

/// Bit-exact identity key for a point.
///
/// Built from the raw `f64::to_bits` pattern of each coordinate, so two
/// coordinates that differ by a single ULP produce distinct keys. Vertex
/// deduplication keyed on `PointKey` is therefore deterministic: the same
/// byte stream always produces the same vertex table.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, PointKey};
///
/// let a = PointKey::new(&Point3::new(1.0, 2.0, 3.0));
/// let b = PointKey::new(&Point3::new(1.0, 2.0, 3.0));
/// let c = PointKey::new(&Point3::new(1.0 + f64::EPSILON, 2.0, 3.0));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey([u64; 3]);

impl PointKey {
    /// Create a key from a point's raw coordinate bits.
    #[inline]
    #[must_use]
    pub fn new(point: &Point3<f64>) -> Self {
        Self([point.x.to_bits(), point.y.to_bits(), point.z.to_bits()])
    }
}

impl From<&Point3<f64>> for PointKey {
    #[inline]
    fn from(point: &Point3<f64>) -> Self {
        Self::new(point)
    }
}
