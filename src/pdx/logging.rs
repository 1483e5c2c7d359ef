//! Logger initialization for the pdx binary
//!
//! The library itself only emits through the `log` facade.

use std::sync::Once;

/// Logger configuration.
///
/// Filters follow the `env_logger` filter syntax (e.g. "info", "warn",
/// "pdx=debug"). `env_filter` is an explicit choice (the `--log` flag) and
/// wins over `RUST_LOG`; `default_filter` (from the configuration file) only
/// applies when neither is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter directive that takes effect, given the value of `RUST_LOG`
    pub fn effective_filter(&self, rust_log: Option<&str>) -> String {
        self.env_filter
            .as_deref()
            .or(rust_log)
            .or(self.default_filter.as_deref())
            .unwrap_or("info")
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Logs go to stderr so rendered output on
/// stdout stays clean.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.effective_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized with filter '{}'", filter);
    });
}
