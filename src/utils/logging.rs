// Mon Oct 19 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Diagnostics go to stderr; stdout carries only the report.
    /// `RUST_LOG` overrides the default level.
    pub fn init_logger(level: LevelFilter) {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .target(env_logger::Target::Stderr)
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        LoggingUtils::init_logger(LevelFilter::Off);
        LoggingUtils::init_logger(LevelFilter::Off);
    }
}
