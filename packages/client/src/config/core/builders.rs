//! Fluent builder methods for `ClientSettings`
//!
//! Each method consumes the record and returns an updated copy, so a shared
//! default can be specialised without being mutated.
//!
//! ```no_run
//! use std::time::Duration;
//! use hostpool_client::config::ClientSettings;
//!
//! let settings = ClientSettings::default()
//!     .with_connect(Duration::from_secs(5))
//!     .with_max_host_idle_conns(32);
//! assert_eq!(settings.connect, Duration::from_secs(5));
//! ```

use std::time::Duration;

use super::types::ClientSettings;

impl ClientSettings {
    /// Set the TCP connect timeout
    #[must_use]
    pub fn with_connect(mut self, timeout: Duration) -> Self {
        self.connect = timeout;
        self
    }

    /// Set the TCP keep-alive probe interval
    #[must_use]
    pub fn with_conn_keep_alive(mut self, interval: Duration) -> Self {
        self.conn_keep_alive = interval;
        self
    }

    /// Set the expect-continue wait
    #[must_use]
    pub fn with_expect_continue(mut self, timeout: Duration) -> Self {
        self.expect_continue = timeout;
        self
    }

    /// Set how long idle pooled connections are kept
    #[must_use]
    pub fn with_idle_conn(mut self, timeout: Duration) -> Self {
        self.idle_conn = timeout;
        self
    }

    /// Set the idle-connection cap across all hosts
    #[must_use]
    pub fn with_max_all_idle_conns(mut self, max_idle: usize) -> Self {
        self.max_all_idle_conns = max_idle;
        self
    }

    /// Set the idle-connection cap for a single host
    #[must_use]
    pub fn with_max_host_idle_conns(mut self, max_idle: usize) -> Self {
        self.max_host_idle_conns = max_idle;
        self
    }

    /// Set the response-header timeout
    #[must_use]
    pub fn with_response_header(mut self, timeout: Duration) -> Self {
        self.response_header = timeout;
        self
    }

    /// Set the TLS handshake timeout
    #[must_use]
    pub fn with_tls_handshake(mut self, timeout: Duration) -> Self {
        self.tls_handshake = timeout;
        self
    }
}
