//! Logging setup
//!
//! Structured logging via `tracing`. Human-readable compact output by default,
//! JSON lines on request. `RUST_LOG` always wins over the built-in levels.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line text
    #[default]
    Compact,
    /// JSON lines
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Log `debug` events from this crate
    pub verbose: bool,

    /// Output format
    pub format: LogFormat,
}

impl ObservabilityConfig {
    /// Create default logging config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug-level events
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Emit JSON lines
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_directives(&self) -> &'static str {
        if self.verbose {
            "warn,cubo_scaffold=debug,cubo_scaffold_cli_lib=debug"
        } else {
            "warn,cubo_scaffold=info"
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use cubo_scaffold::observability::{self, ObservabilityConfig};
///
/// observability::init(&ObservabilityConfig::new().with_verbose(true)).unwrap();
/// tracing::debug!("logging ready");
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.default_directives(), "warn,cubo_scaffold=info");
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new().with_verbose(true).with_json();
        assert!(config.verbose);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.default_directives().contains("cubo_scaffold=debug"));
    }
}
