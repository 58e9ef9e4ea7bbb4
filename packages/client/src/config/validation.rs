//! Settings validation
//!
//! Bounds are generous: they reject values that can only be typos (a connect
//! timeout of days) rather than tune behaviour.

use std::time::Duration;

use super::core::ClientSettings;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("TLS protocol configuration rejected: {0}")]
    Protocol(#[from] rustls::Error),
}

const MAX_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_RESPONSE_TIMEOUT: Duration = Duration::from_secs(3600);
const MAX_IDLE_TIMEOUT: Duration = Duration::from_secs(86_400);
const MAX_IDLE_CONNS: usize = 65_536;

impl ClientSettings {
    /// Validates the settings before a transport is built from them
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidTimeout` - connect, TLS handshake or expect-continue above 5 minutes,
    ///   response-header or keep-alive above 1 hour, idle-connection above 1 day
    /// - `InvalidParameter` - an idle-connection cap above 65536
    pub fn validate(&self) -> ConfigResult<()> {
        check_timeout(self.connect, "connect", MAX_HANDSHAKE_TIMEOUT)?;
        check_timeout(self.tls_handshake, "tls_handshake", MAX_HANDSHAKE_TIMEOUT)?;
        check_timeout(self.expect_continue, "expect_continue", MAX_HANDSHAKE_TIMEOUT)?;
        check_timeout(self.response_header, "response_header", MAX_RESPONSE_TIMEOUT)?;
        check_timeout(self.conn_keep_alive, "conn_keep_alive", MAX_RESPONSE_TIMEOUT)?;
        check_timeout(self.idle_conn, "idle_conn", MAX_IDLE_TIMEOUT)?;
        check_count(self.max_all_idle_conns, "max_all_idle_conns")?;
        check_count(self.max_host_idle_conns, "max_host_idle_conns")?;
        Ok(())
    }
}

fn check_timeout(value: Duration, name: &str, max: Duration) -> ConfigResult<()> {
    if value > max {
        return Err(ConfigurationError::InvalidTimeout(format!(
            "{name} must not exceed {}s, got {}s",
            max.as_secs(),
            value.as_secs()
        )));
    }
    Ok(())
}

fn check_count(value: usize, name: &str) -> ConfigResult<()> {
    if value > MAX_IDLE_CONNS {
        return Err(ConfigurationError::InvalidParameter(format!(
            "{name} must not exceed {MAX_IDLE_CONNS}, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ClientSettings::default().validate().is_ok());
    }

    #[test]
    fn oversized_connect_timeout_is_rejected() {
        let settings = ClientSettings::default().with_connect(Duration::from_secs(301));
        match settings.validate() {
            Err(ConfigurationError::InvalidTimeout(msg)) => assert!(msg.starts_with("connect")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn oversized_idle_cap_is_rejected() {
        let settings = ClientSettings::default().with_max_all_idle_conns(MAX_IDLE_CONNS + 1);
        assert!(matches!(
            settings.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }
}
