//! Logging utilities and structured logging support

use log::LevelFilter;

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system at `info` level
pub fn init() {
    init_with_level("info");
}

/// Initialize the logging system with an explicit level filter
///
/// Unknown level names fall back to `info`. Calling this more than once is
/// harmless; only the first call installs a logger.
pub fn init_with_level(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    // try_init so test binaries and repeated setup don't panic
    let _ = env_logger::Builder::from_default_env()
        .filter_level(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_with_level("debug");
        init_with_level("not-a-level");
        init();
    }
}
