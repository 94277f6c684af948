//! Logging setup.
//!
//! The crate logs through the `log` facade; these helpers install
//! `env_logger` as the backend. Installing twice is harmless.

use log::LevelFilter;

/// Install `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok()
}

/// Install `env_logger` with an explicit level, ignoring `RUST_LOG`.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging_with_level(level: LevelFilter) -> bool {
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init()
        .is_ok()
}

/// Install `env_logger` at the level matching a numeric verbosity.
///
/// Returns `false` if a logger was already installed.
pub fn init_logging_with_verbosity(verbosity: i32) -> bool {
    init_logging_with_level(level_from_verbosity(verbosity))
}

/// Map a numeric verbosity (`-1` fatal only .. `2+` debug) to a level filter.
pub fn level_from_verbosity(verbosity: i32) -> LevelFilter {
    match verbosity {
        i if i < 0 => LevelFilter::Error,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
