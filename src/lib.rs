//! spheretrace path tracer
//!
//! Renders scenes of diffuse spheres by Monte Carlo path tracing on the CPU
//! and writes them as PPM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vec3;
pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod interval;
pub mod camera;
pub mod random;
pub mod material;
pub mod scene;
pub mod output;
