//! Random number generation for path tracing.
//!
//! Randomness is an explicit stream owned by the caller: every sampling
//! function takes the generator it draws from, so a render seeded with the
//! same value produces the same image.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vec3::{unit_vector, Vec3};

/// The random stream a render draws from.
pub type RandomStream = ChaCha20Rng;

/// Create a reproducible stream from a seed.
pub fn seeded(seed: u64) -> RandomStream {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Create a stream seeded from the thread-local OS-backed generator.
pub fn from_entropy() -> RandomStream {
    ChaCha20Rng::from_rng(&mut rand::rng())
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random()
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Vector with three independent components, each uniform in [min, max).
pub fn random_vec3_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
    )
}

/// Uniform point strictly inside the unit sphere, by rejection sampling.
///
/// The origin itself is rejected so the result can always be normalized.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        let len_sq = p.length_squared();
        if len_sq < 1.0 && len_sq > f64::MIN_POSITIVE {
            return p;
        }
    }
}

/// Random unit vector, uniform over directions.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    unit_vector(random_in_unit_sphere(rng))
}

/// Random unit vector in the hemisphere around `normal`.
pub fn random_on_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) < 0.0 {
        // Flip to the correct hemisphere
        -on_unit_sphere
    } else {
        on_unit_sphere
    }
}
