use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::{Args, SceneArg};
use logger::init_logger;
use spheretrace::camera::Camera;
use spheretrace::hittable::HittableList;
use spheretrace::output::{save_image, ImageFormat};
use spheretrace::{random, scene};

/// Create camera from command line settings
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;
    camera.absorption = args.absorption.into();
    camera.jitter = args.jitter;
    camera.show_progress = !args.no_progress;
    camera
}

fn create_scene(choice: SceneArg) -> HittableList {
    match choice {
        SceneArg::Default => scene::default_scene(),
        SceneArg::Ground => scene::ground_scene(),
    }
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("spheretrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    // Reject an unusable output path before spending time on the render
    if let Err(e) = ImageFormat::from_path(std::path::Path::new(&args.output)) {
        error!("{}", e);
        std::process::exit(1);
    }

    let world = create_scene(args.scene);
    info!("Scene {:?} with {} spheres", args.scene, world.len());

    let camera = create_camera(&args);

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using random seed {}", seed);
            random::seeded(seed)
        }
        None => random::from_entropy(),
    };

    let image = camera.render(&world, &mut rng);

    if let Err(e) = save_image(&image, &args.output) {
        error!("{}", e);
        std::process::exit(1);
    }
}
