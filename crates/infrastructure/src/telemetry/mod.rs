//! Logging initialisation
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout stays
//! reserved for the widget itself.

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directives could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured directives
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::Filter(e.to_string())),
    }
}

/// Initialize the global subscriber
///
/// Call once, early in `main`.
///
/// # Example
///
/// ```rust,ignore
/// use infrastructure::config::LoggingConfig;
/// use infrastructure::telemetry::init_logging;
///
/// init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
/// ```
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = build_filter(config)?;

    match config.format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        },
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        },
    }

    info!(filter = %config.filter, format = ?config.format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported() {
        // RUST_LOG may be set in CI; only assert when it isn't
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "nimbus=loud".to_string(),
            format: LogFormat::Text,
        };
        assert!(matches!(build_filter(&config), Err(LoggingError::Filter(_))));
    }

    #[test]
    fn default_filter_parses() {
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }
}
