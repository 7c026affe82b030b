use clap::{Parser, ValueEnum};
use log::LevelFilter;
use spheretrace::material::Absorption;

/// Log levels selectable on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// How a surface color absorbs the light bounced onto it
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AbsorptionArg {
    /// Multiply surface color and incoming light
    Linear,
    /// Geometric mean of surface color and incoming light
    GammaCorrected,
}

impl From<AbsorptionArg> for Absorption {
    fn from(arg: AbsorptionArg) -> Self {
        match arg {
            AbsorptionArg::Linear => Absorption::Linear,
            AbsorptionArg::GammaCorrected => Absorption::GammaCorrected,
        }
    }
}

/// Built-in scene to render
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    /// Five colored spheres on a ground sphere
    Default,
    /// The ground sphere alone
    Ground,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "spheretrace")]
#[command(about = "A Monte Carlo path tracer for diffuse spheres")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "640", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "1000", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per sample
    #[arg(long, short = 'd', default_value = "100", help = "Maximum number of bounces per sample")]
    pub max_depth: u32,

    /// Seed for the random stream; a fresh seed is drawn when omitted
    #[arg(long, help = "Seed for the random stream (random when omitted)")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value = "linear")]
    pub absorption: AbsorptionArg,

    #[arg(long, value_enum, default_value = "default")]
    pub scene: SceneArg,

    /// Jitter samples inside each pixel
    #[arg(long, help = "Send each sample through a random point of its pixel")]
    pub jitter: bool,

    #[arg(long, help = "Do not draw a progress bar")]
    pub no_progress: bool,

    /// Output file path (.ppm for plain-text pixmap, .png for PNG)
    #[arg(short, long, default_value = "image.ppm", help = "Output file path (.ppm or .png)")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["spheretrace"]).unwrap();
        assert_eq!(args.width, 640);
        assert_eq!(args.height, 480);
        assert_eq!(args.samples_per_pixel, 1000);
        assert_eq!(args.max_depth, 100);
        assert_eq!(args.seed, None);
        assert_eq!(Absorption::from(args.absorption), Absorption::Linear);
        assert!(!args.jitter);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
        assert_eq!(args.output, "image.ppm");
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "spheretrace",
            "--width",
            "64",
            "-s",
            "8",
            "-d",
            "5",
            "--seed",
            "17",
            "--absorption",
            "gamma-corrected",
            "--scene",
            "ground",
            "-o",
            "out.png",
            "--debug-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.width, 64);
        assert_eq!(args.samples_per_pixel, 8);
        assert_eq!(args.max_depth, 5);
        assert_eq!(args.seed, Some(17));
        assert_eq!(Absorption::from(args.absorption), Absorption::GammaCorrected);
        assert!(matches!(args.scene, SceneArg::Ground));
        assert_eq!(args.output, "out.png");
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Debug);
    }

    #[test]
    fn test_debug_level_accepts_every_level() {
        for (name, level) in [
            ("off", LevelFilter::Off),
            ("error", LevelFilter::Error),
            ("warn", LevelFilter::Warn),
            ("trace", LevelFilter::Trace),
        ] {
            let args = Args::try_parse_from(["spheretrace", "--debug-level", name]).unwrap();
            assert_eq!(LevelFilter::from(args.debug_level), level);
        }
        assert!(Args::try_parse_from(["spheretrace", "--log-level", "debug"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_absorption() {
        assert!(Args::try_parse_from(["spheretrace", "--absorption", "cubic"]).is_err());
    }
}
