//! Logging setup for the command-line front end
//!
//! The library only emits through the `log` facade; the binary installs
//! `env_logger` here.

use log::LevelFilter;

/// Pick the default level for the `--debug` flag
#[must_use]
pub const fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging to stderr
///
/// Uses `Debug` when `debug_enabled`, otherwise `Info`. `RUST_LOG`, when set,
/// overrides both. Calling this twice is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
    }
}
