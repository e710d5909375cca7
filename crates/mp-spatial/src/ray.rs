//! Ray primitives: ray-box and ray-triangle intersection.

use nalgebra::{Point3, Vector3};

use mesh_types::Aabb;

/// Direction components below this magnitude treat the ray as parallel to
/// the corresponding slab; the same threshold rejects rays parallel to a
/// triangle's plane.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-8;

/// A ray defined by an origin point and a direction vector.
///
/// The direction does not need to be normalized; intersection parameters
/// `t` are expressed in units of the direction's length. The analyzer
/// always passes unit directions so its distances are metric.
///
/// # Example
///
/// ```
/// use mp_spatial::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::x());
/// let p = ray.point_at(5.0);
/// assert!((p.x - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin of the ray.
    pub origin: Point3<f64>,
    /// The direction of the ray (not necessarily normalized).
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point along the ray at parameter `t`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::x())
    }
}

/// Result of a successful ray cast against a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter of the hit (metric distance for unit directions).
    pub distance: f64,
    /// Index of the triangle that was hit.
    pub triangle_index: usize,
    /// World-space point of the hit.
    pub point: Point3<f64>,
    /// Unit face normal of the hit triangle (zero for degenerate faces).
    pub normal: Vector3<f64>,
}

/// Ray-AABB intersection using the slab method.
///
/// For each axis the ray is clipped against the box's parallel plane pair;
/// the surviving interval `[t_min, t_max]` starts at `[0, +inf)`, so only
/// the forward part of the ray counts. When the ray runs parallel to a slab
/// (`|d| < 1e-8`) the origin must already lie inside it.
///
/// Returns the clipped interval, or `None` on a miss.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
/// use mp_spatial::{ray_aabb, Ray};
/// use nalgebra::Vector3;
///
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// let ray = Ray::new(Point3::new(0.5, 0.5, -1.0), Vector3::z());
///
/// let (t_min, t_max) = ray_aabb(&ray, &aabb).unwrap();
/// assert!((t_min - 1.0).abs() < 1e-10);
/// assert!((t_max - 2.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<(f64, f64)> {
    let mut t_min = 0.0_f64;
    let mut t_max = f64::MAX;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        let slab_min = aabb.min[axis];
        let slab_max = aabb.max[axis];

        if dir.abs() < PARALLEL_EPSILON {
            if origin < slab_min || origin > slab_max {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t1 = (slab_min - origin) * inv;
            let mut t2 = (slab_max - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_min = t_min.max(t1);
            t_max = t_max.min(t2);

            if t_min > t_max {
                return None;
            }
        }
    }

    Some((t_min, t_max))
}

/// Möller–Trumbore ray-triangle intersection.
///
/// Returns the ray parameter `t` of the hit, or `None` when the ray is
/// parallel to the triangle's plane, the barycentric coordinates fall
/// outside the triangle, or the hit lies behind the origin (`t <= 1e-8`).
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn ray_triangle(
    ray: &Ray,
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> Option<f64> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to the triangle plane
    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);

    if t > PARALLEL_EPSILON {
        Some(t)
    } else {
        None
    }
}
