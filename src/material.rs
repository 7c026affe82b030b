//! Diffuse surface response: how a bounce redirects a ray and how the
//! surface color absorbs the light that comes back along it.

use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vec3::Color;

/// How a surface's reflectance combines with the light arriving from the
/// next bounce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Absorption {
    /// Component-wise product of albedo and incoming light.
    #[default]
    Linear,
    /// Component-wise geometric mean, `sqrt(albedo * incoming)`.
    ///
    /// Falls off much more slowly than [`Absorption::Linear`] over several
    /// bounces, so images come out brighter.
    GammaCorrected,
}

/// Scatter a ray off a diffuse surface.
///
/// The new direction is a uniform unit vector in the hemisphere of the
/// surface normal. The origin is the hit point itself; self-intersection is
/// avoided by the minimum `t` of the next intersection test.
pub fn scatter_diffuse<R: Rng + ?Sized>(rng: &mut R, rec: &HitRecord<'_>) -> Ray {
    Ray::new(rec.p, random::random_on_hemisphere(rng, rec.normal))
}

/// Product of every albedo met along a path so far.
///
/// Bounces are folded in front to back, which lets the tracer run as a loop
/// instead of recursing once per bounce. For the gamma-corrected mode the
/// k-th albedo contributes with exponent `2^-k`, so the result equals the
/// nested `sqrt(a1 * sqrt(a2 * ... light))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    color: Color,
    exponent: f64,
    absorption: Absorption,
}

impl Throughput {
    /// A path that has not bounced yet.
    pub fn new(absorption: Absorption) -> Self {
        Self {
            color: Color::ONE,
            exponent: 1.0,
            absorption,
        }
    }

    /// Fold in the albedo of one more surface.
    pub fn absorb(&mut self, albedo: Color) {
        match self.absorption {
            Absorption::Linear => self.color *= albedo,
            Absorption::GammaCorrected => {
                self.exponent *= 0.5;
                self.color *= albedo.powf(self.exponent);
            }
        }
    }

    /// Color seen at the start of the path when it ends in `light`.
    pub fn resolve(&self, light: Color) -> Color {
        match self.absorption {
            Absorption::Linear => self.color * light,
            Absorption::GammaCorrected => self.color * light.powf(self.exponent),
        }
    }
}
