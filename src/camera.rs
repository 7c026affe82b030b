//! Camera for ray generation and scene rendering

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;

use crate::hittable::{Hittable, EPSILON};
use crate::interval::Interval;
use crate::material::{scatter_diffuse, Absorption, Throughput};
use crate::random;
use crate::ray::Ray;
use crate::vec3::{add3, sub3, unit_vector, Color, Vec3, BLACK, WHITE};

/// 8-bit RGB image produced by a render.
pub type RgbImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

/// Vertical gradient lighting every ray that escapes the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Color seen looking straight down
    pub horizon: Color,
    /// Color seen looking straight up
    pub sky: Color,
}

impl Background {
    /// A gradient that is the same color in every direction.
    pub fn uniform(color: Color) -> Self {
        Self {
            horizon: color,
            sky: color,
        }
    }

    /// Light arriving along `direction`, which must not be zero-length.
    pub fn color(&self, direction: Vec3) -> Color {
        let unit_direction = unit_vector(direction);
        // Y = -1 (down) gives a = 0, Y = 1 (up) gives a = 1
        let a = 0.5 * (unit_direction.y + 1.0);
        // Same as (1 - a) * horizon + a * sky, but exact when both ends agree
        self.horizon + a * (self.sky - self.horizon)
    }
}

impl Default for Background {
    /// White at the horizon fading to light blue overhead.
    fn default() -> Self {
        Self {
            horizon: WHITE,
            sky: Color::new(0.5, 0.7, 1.0),
        }
    }
}

/// Pixel grid on the viewport plane, derived from the camera settings.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    /// World position of the top-left pixel center (pixel 0,0)
    pixel00_loc: Vec3,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3,
}

/// Pinhole camera looking down the negative z axis.
///
/// All fields are plain settings. The viewport is derived from them each time
/// a render or ray starts, so they can be changed freely between renders.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of traced samples averaged into each pixel (at least one is taken)
    pub samples_per_pixel: u32,
    /// Bounce budget of a single sample
    pub max_depth: u32,
    /// Camera position in world space
    pub center: Vec3,
    /// Distance from the camera to the viewport plane
    pub focal_length: f64,
    /// Viewport width in world units; the height follows the image aspect
    pub viewport_width: f64,
    /// Environment light for rays that miss everything
    pub background: Background,
    /// How surface colors absorb incoming light
    pub absorption: Absorption,
    /// Send each sample through a random point of the pixel instead of its center
    pub jitter: bool,
    /// Draw a progress bar while rendering
    pub show_progress: bool,
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 640x480 image, 1000 samples per pixel, 100 bounces, camera at
    /// (0, 0, 1) with focal length 1 and a viewport 2 units wide.
    pub fn new() -> Self {
        Self {
            image_width: 640,
            image_height: 480,
            samples_per_pixel: 1000,
            max_depth: 100,
            center: Vec3::new(0.0, 0.0, 1.0),
            focal_length: 1.0,
            viewport_width: 2.0,
            background: Background::default(),
            absorption: Absorption::Linear,
            jitter: false,
            show_progress: true,
        }
    }

    /// Compute the pixel grid for the current settings.
    fn viewport(&self) -> Viewport {
        let width = self.image_width.max(1) as f64;
        let height = self.image_height.max(1) as f64;

        let aspect_ratio = width / height;
        let viewport_height = self.viewport_width / aspect_ratio;

        // Image rows grow downwards, so the vertical edge points to -y
        let viewport_u = Vec3::new(self.viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / width;
        let pixel_delta_v = viewport_v / height;

        let viewport_upper_left = sub3(
            self.center - Vec3::new(0.0, 0.0, self.focal_length),
            viewport_u / 2.0,
            viewport_v / 2.0,
        );
        Viewport {
            pixel00_loc: viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v),
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Renders the scene into an 8-bit image, row-major from the top-left.
    pub fn render<R: Rng + ?Sized>(&self, world: &dyn Hittable, rng: &mut R) -> RgbImage {
        let mut image = RgbImage::new(self.image_width, self.image_height);
        let viewport = self.viewport();

        info!(
            "Rendering {}x{} with {} samples per pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let pixel = self.sample_pixel(&viewport, i, j, world, rng);
                image.put_pixel(i, j, Rgb(pixel));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Average `samples_per_pixel` traces through pixel (i, j) into an RGB triple.
    ///
    /// A sample count of zero is treated as one.
    ///
    /// # Panics
    ///
    /// If an averaged channel does not quantize into 0..=255. Colors are built
    /// only from albedos and background colors in [0, 1], so this means a bug
    /// in the lighting math.
    pub fn render_pixel<R: Rng + ?Sized>(
        &self,
        i: u32,
        j: u32,
        world: &dyn Hittable,
        rng: &mut R,
    ) -> [u8; 3] {
        self.sample_pixel(&self.viewport(), i, j, world, rng)
    }

    fn sample_pixel<R: Rng + ?Sized>(
        &self,
        viewport: &Viewport,
        i: u32,
        j: u32,
        world: &dyn Hittable,
        rng: &mut R,
    ) -> [u8; 3] {
        let samples = self.samples_per_pixel.max(1);
        let mut pixel_color = BLACK;
        for _sample in 0..samples {
            let r = self.ray_through(viewport, i, j, rng);
            pixel_color += self.ray_color(&r, world, rng);
        }

        let average = pixel_color / samples as f64;
        average.to_array().map(|channel| {
            let scaled = channel * 255.0;
            // Truncates to 0..=255 exactly when -1 < scaled < 256; NaN fails too
            assert!(
                scaled > -1.0 && scaled < 256.0,
                "pixel ({i}, {j}) averaged to {average:?}, outside [0, 1]"
            );
            scaled as u8
        })
    }

    /// Primary ray through pixel (i, j), normalized.
    pub fn get_ray<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Ray {
        self.ray_through(&self.viewport(), i, j, rng)
    }

    fn ray_through<R: Rng + ?Sized>(&self, viewport: &Viewport, i: u32, j: u32, rng: &mut R) -> Ray {
        let (dx, dy) = if self.jitter {
            self.sample_square(rng)
        } else {
            (0.0, 0.0)
        };
        let pixel_sample = add3(
            viewport.pixel00_loc,
            (i as f64 + dx) * viewport.pixel_delta_u,
            (j as f64 + dy) * viewport.pixel_delta_v,
        );

        Ray::new(self.center, unit_vector(pixel_sample - self.center))
    }

    /// Random offset within the [-0.5, 0.5) pixel square.
    fn sample_square<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (random::random_f64(rng) - 0.5, random::random_f64(rng) - 0.5)
    }

    /// Trace a ray through the scene with the camera's bounce budget.
    pub fn ray_color<R: Rng + ?Sized>(&self, r: &Ray, world: &dyn Hittable, rng: &mut R) -> Color {
        trace(r, world, self.max_depth, self.background, self.absorption, rng)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.image_height as u64);
        match ProgressStyle::default_bar().template("{bar:40} {pos}/{len} lines ETA: {eta}") {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Falling back to the default progress style: {}", e),
        }
        pb
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow a ray through at most `depth` bounces and return the light it carries.
///
/// Each hit scatters the ray diffusely and folds the surface albedo into the
/// path throughput; escaping rays pick up the background. A path that uses up
/// its whole budget gathers no light.
pub fn trace<R: Rng + ?Sized>(
    r: &Ray,
    world: &dyn Hittable,
    depth: u32,
    background: Background,
    absorption: Absorption,
    rng: &mut R,
) -> Color {
    let mut ray = *r;
    let mut throughput = Throughput::new(absorption);

    for _bounce in 0..depth {
        match world.hit(&ray, Interval::new(EPSILON, f64::INFINITY)) {
            Some(rec) => {
                throughput.absorb(rec.primitive.albedo());
                ray = scatter_diffuse(rng, &rec);
            }
            None => return throughput.resolve(background.color(ray.direction)),
        }
    }

    BLACK
}
