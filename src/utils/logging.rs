// Mon Oct 19 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    /// Logs share stderr with the trace, so info and debug output needs an
    /// explicit level. Trace verbosity never changes it.
    pub fn resolve_level(level: Option<&str>) -> LevelFilter {
        match level {
            Some(level) => Self::level_from_str(level),
            None => LevelFilter::Warn,
        }
    }
}
