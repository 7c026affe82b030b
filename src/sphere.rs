//! Sphere primitive for ray tracing.
//!
//! Ray-sphere intersection uses the half-b form of the quadratic: with
//! `oc = center - origin`, `a = d·d`, `h = d·oc` and `c = |oc|² - r²`, the
//! roots are `(h ± sqrt(h² - a·c)) / a`.

use crate::hittable::EPSILON;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Color, Vec3};

/// Sphere primitive defined by center, radius, and diffuse color.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3,

    /// Radius of the sphere, expected to be positive.
    pub radius: f64,

    /// Diffuse reflectance, each channel in [0, 1].
    pub albedo: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, albedo: Color) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            albedo,
        }
    }

    /// Nearest root inside `ray_t` and the outward normal there.
    ///
    /// The ray direction must not be zero-length.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<(f64, Vec3)> {
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < EPSILON {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // a > 0, so the first root is the nearer one
        let root = [(h - sqrtd) / a, (h + sqrtd) / a]
            .into_iter()
            .find(|&t| ray_t.contains(t))?;

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some((root, outward_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::{Hittable, Primitive};

    fn forward() -> Interval {
        Interval::new(EPSILON, f64::INFINITY)
    }

    fn unit_color_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Color::ONE)
    }

    fn test_sphere() -> Primitive {
        Primitive::Sphere(unit_color_sphere())
    }

    #[test]
    fn test_hit_from_camera() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, forward()).expect("ray should hit");
        assert!((rec.t - 1.5).abs() < 1e-9);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-9);
        assert!(rec.front_face);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -3.0));
        let rec = sphere.hit(&ray, forward()).expect("ray should hit");
        assert!((rec.t - 2.5 / 3.0).abs() < 1e-9);
        assert!((rec.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
    }

    #[test]
    fn test_miss_when_aimed_away() {
        let sphere = test_sphere();
        let away = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&away, forward()).is_none());
        let aside = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(sphere.hit(&aside, forward()).is_none());
    }

    #[test]
    fn test_tangent_ray_is_a_miss() {
        let sphere = test_sphere();
        let tangent = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&tangent, forward()).is_none());
    }

    #[test]
    fn test_inside_hit_uses_far_root_and_flips_normal() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0));
        let rec = sphere.hit(&ray, forward()).expect("ray should hit");
        assert!((rec.t - 0.5).abs() < 1e-9);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_near_root_outside_interval_falls_back_to_far_root() {
        let sphere = unit_color_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let (t, _) = sphere
            .intersect(&ray, Interval::new(2.0, f64::INFINITY))
            .expect("far root should qualify");
        assert!((t - 2.5).abs() < 1e-9);
        let (t, _) = sphere.intersect(&ray, forward()).expect("near root should qualify");
        assert!((t - 1.5).abs() < 1e-9);
        assert!(sphere_misses_between(&ray, 1.6, 2.4));
    }

    fn sphere_misses_between(ray: &Ray, min: f64, max: f64) -> bool {
        test_sphere().hit(ray, Interval::new(min, max)).is_none()
    }
}
