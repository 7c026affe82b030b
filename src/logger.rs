use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` is still read, but the level given here takes precedence.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .init();
}
