//! Built-in scenes.

use crate::hittable::HittableList;
use crate::sphere::Sphere;
use crate::vec3::{hex_color, Color, Vec3};

/// Flat UI palette used by the default scene.
pub mod palette {
    use super::{hex_color, Color};

    /// Emerald green, `#2ecc71`
    pub fn emerald() -> Color {
        hex_color(0x2ecc71)
    }

    /// Carrot orange, `#e67e22`
    pub fn carrot() -> Color {
        hex_color(0xe67e22)
    }

    /// Peter river blue, `#3498db`
    pub fn peter_river() -> Color {
        hex_color(0x3498db)
    }

    /// Alizarin red, `#e74c3c`
    pub fn alizarin() -> Color {
        hex_color(0xe74c3c)
    }

    /// Wet asphalt grey, `#34495e`
    pub fn wet_asphalt() -> Color {
        hex_color(0x34495e)
    }

    /// Amethyst purple, `#9b59b6`
    pub fn amethyst() -> Color {
        hex_color(0x9b59b6)
    }
}

/// The ground: a radius-100 sphere whose top sits half a unit below the camera axis.
pub fn ground() -> Sphere {
    Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, palette::wet_asphalt())
}

/// Five colored spheres resting around the view center on the ground sphere.
pub fn default_scene() -> HittableList {
    HittableList::from_iter([
        Sphere::new(Vec3::new(0.0, 0.5, -1.0), 0.5, palette::emerald()),
        Sphere::new(Vec3::new(0.0, -0.5, -1.0), 0.5, palette::carrot()),
        Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, palette::peter_river()),
        Sphere::new(Vec3::new(-0.5, -0.3, -0.5), 0.2, palette::alizarin()),
        Sphere::new(Vec3::new(-0.8, -0.3, -0.2), 0.2, palette::amethyst()),
        ground(),
    ])
}

/// Only the ground sphere under the default sky.
pub fn ground_scene() -> HittableList {
    HittableList::from_iter([ground()])
}
