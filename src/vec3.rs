//! Vector algebra for points, directions and colors.
//!
//! The arithmetic itself comes from [`glam::DVec3`] (`+`, `-`, `*`, `/`,
//! [`DVec3::dot`], [`DVec3::length`], [`DVec3::length_squared`]); this module
//! adds the few operations the tracer needs on top of it.

use glam::DVec3;

/// Three-component `f64` vector used for points and directions.
pub type Vec3 = DVec3;

/// RGB color with each channel expected in [0, 1].
pub type Color = DVec3;

/// Black, the color returned once the bounce budget runs out.
pub const BLACK: Color = DVec3::ZERO;

/// White, full reflectance on every channel.
pub const WHITE: Color = DVec3::ONE;

/// Component-wise sum of three vectors.
pub fn add3(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a + b + c
}

/// Subtract `b` and `c` from `a`, component by component.
pub fn sub3(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a - b - c
}

/// Scale a vector to unit length.
///
/// `v` must not be zero-length. This is not checked: every caller works with
/// directions derived from two distinct points or from a rejection sample
/// that excludes the origin.
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Convert a packed `0xRRGGBB` value into a unit-range color.
pub fn hex_color(hex: u32) -> Color {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f64 / 255.0;
    Color::new(channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-5;

    fn assert_vec_eq(expected: Vec3, actual: Vec3) {
        assert!(
            (expected - actual).abs().max_element() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn sample_vectors() -> (Vec3, Vec3, Vec3) {
        (
            Vec3::new(1.5, 2.5, 3.5),
            Vec3::new(4.1, 4.2, 4.3),
            Vec3::new(-2.9, -2.8, -2.7),
        )
    }

    #[test]
    fn test_addition() {
        let (a, b, c) = sample_vectors();
        assert_vec_eq(Vec3::new(5.6, 6.7, 7.8), a + b);
        assert_vec_eq(Vec3::new(2.7, 3.9, 5.1), add3(a, b, c));
    }

    #[test]
    fn test_subtraction() {
        let (a, b, c) = sample_vectors();
        assert_vec_eq(Vec3::new(-2.6, -1.7, -0.8), a - b);
        assert_vec_eq(Vec3::new(0.3, 1.1, 1.9), sub3(a, b, c));
    }

    #[test]
    fn test_multiplication_and_division() {
        let (a, b, _) = sample_vectors();
        assert_vec_eq(Vec3::new(0.45, 0.75, 1.05), a * 0.3);
        assert_vec_eq(Vec3::new(6.15, 10.5, 15.05), a * b);
        assert_vec_eq(Vec3::new(5.0, 8.333333, 11.666667), a / 0.3);
        assert_vec_eq(a, (a * 0.3) / 0.3);
    }

    #[test]
    fn test_lengths_and_dot() {
        let (a, b, c) = sample_vectors();
        assert!((a.length_squared() - 20.75).abs() < TOLERANCE);
        assert!((b.length_squared() - 52.94).abs() < TOLERANCE);
        assert!((c.length_squared() - 23.54).abs() < TOLERANCE);
        assert!((a.length() - 4.555217).abs() < TOLERANCE);
        assert!((a.dot(b) - 31.7).abs() < TOLERANCE);
        assert!((b.dot(c) + 35.26).abs() < TOLERANCE);
        assert!((a.dot(c) + 20.8).abs() < TOLERANCE);
        assert_eq!(a.length_squared(), a.dot(a));
    }

    #[test]
    fn test_unit_vector() {
        let (a, _, c) = sample_vectors();
        let unit = unit_vector(a);
        assert_vec_eq(Vec3::new(0.329293, 0.548821, 0.768350), unit);
        assert!((unit.length() - 1.0).abs() < TOLERANCE);
        assert!((unit_vector(c).length() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xFFFFFF), WHITE);
        assert_eq!(hex_color(0x000000), BLACK);
        assert_vec_eq(Color::new(46.0 / 255.0, 204.0 / 255.0, 113.0 / 255.0), hex_color(0x2ecc71));
    }
}
