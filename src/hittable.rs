//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait, the [`HitRecord`] it produces, the closed
//! set of [`Primitive`] shapes and the [`HittableList`] that dispatches a ray
//! over a whole scene.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vec3::{Color, Vec3};

/// Tolerance shared by every intersection test.
///
/// Used as the minimum accepted `t`, so a scattered ray cannot hit the
/// surface it starts on, and as the smallest discriminant counted as a hit,
/// so tangent rays are misses.
pub const EPSILON: f64 = 1e-7;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point where the ray intersects the object
    pub p: Vec3,
    /// Unit surface normal, always pointing against the incident ray
    pub normal: Vec3,
    /// Ray parameter of the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// The primitive that was hit
    pub primitive: &'a Primitive,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting the normal against the incident ray.
    ///
    /// A ray whose direction has a non-negative dot product with the outward
    /// normal is leaving the surface from inside, so the normal is flipped.
    pub fn with_face_normal(
        r: &Ray,
        t: f64,
        outward_normal: Vec3,
        primitive: &'a Primitive,
    ) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        Self {
            p: r.at(t),
            normal: if front_face { outward_normal } else { -outward_normal },
            t,
            front_face,
            primitive,
        }
    }
}

/// Anything a ray can be intersected with.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with `t` inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// Every shape the tracer can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A sphere.
    Sphere(Sphere),
}

impl Primitive {
    /// Diffuse reflectance of the primitive's surface.
    pub fn albedo(&self) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.albedo,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl Hittable for Primitive {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere
                .intersect(r, ray_t)
                .map(|(t, outward_normal)| HitRecord::with_face_normal(r, t, outward_normal, self)),
        }
    }
}

/// Collection of primitives forming a scene.
///
/// Uses linear search for intersection testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HittableList {
    /// Primitives in insertion order
    pub objects: Vec<Primitive>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Into<Primitive>) {
        self.objects.push(object.into());
    }

    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Sphere> for HittableList {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().map(Primitive::from).collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        // Each hit narrows the upper bound so farther objects cannot win
        for object in &self.objects {
            let bound = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(r, ray_t.with_max(bound)) {
                closest = Some(rec);
            }
        }

        closest
    }
}
