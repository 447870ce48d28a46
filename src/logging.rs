//! Structured logging on stderr, so it never interleaves with a scenario's
//! stdout transcript.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Builds the filter: `RUST_LOG` wins over the configured level.
fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(config.level.to_ascii_lowercase()).map_err(|_| ConfigError::InvalidLogLevel {
        level: config.level.clone(),
    })
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = env_filter(config)?;

    let layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_target(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_writer(io::stderr)
            .with_target(true)
            .boxed(),
    };

    if tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::capture::LogCapture;
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_capture_sees_library_events() {
        let logs = LogCapture::start();
        let mut account = crate::account::BankAccount::new();
        account.withdraw(10.0);
        assert!(logs.contents().contains("withdrawal ignored"));
    }
}
