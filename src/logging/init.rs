use std::sync::Once;

/// How [`init_logging`] sets up `env_logger`.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "idlekit=trace"). When unset, `RUST_LOG` is consulted, then `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives; `None` falls back to `RUST_LOG`, then `warn`.
    pub env_filter: Option<String>,
    /// Colour handling for the terminal.
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Later calls are ignored, so tests can call this freely. If another
/// logger was installed first, the failure is swallowed.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);
        builder.is_test(config.is_test);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        let config = LoggingConfig {
            env_filter: Some("idlekit=trace".into()),
            is_test: true,
            ..LoggingConfig::default()
        };

        init_logging(config.clone());
        init_logging(config);
        log::trace!("still usable after a second init");
    }
}
