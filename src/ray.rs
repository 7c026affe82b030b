//! Ray representation for path tracing.
//!
//! A ray is defined as r(t) = origin + t * direction.

use crate::vec3::Vec3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3,

    /// Direction vector of the ray.
    ///
    /// Camera rays and scattered rays are unit length, so `t` is measured in
    /// world units. Nothing here enforces it.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Any `t` is accepted, including negative values.
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}
