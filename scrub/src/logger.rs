// scrub/src/logger.rs
//! Logger bootstrap for the scrub CLI.

use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG` unless an explicit level
/// override is given (from `--quiet` or `--debug`).
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).try_init().ok();
}
