//! Core `ClientSettings` definition

use std::time::Duration;

/// Connection-level tunables for one transport.
///
/// A zero duration disables the corresponding timeout and a zero count
/// removes the corresponding idle-connection cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientSettings {
    /// Maximum time to establish the TCP connection.
    pub connect: Duration,
    /// Interval between TCP keep-alive probes on open connections.
    pub conn_keep_alive: Duration,
    /// Time to wait for `100 Continue` after sending `Expect: 100-continue`.
    ///
    /// Recorded and reported through the transport's settings but not
    /// enforced: the pooled hyper client has no `100-continue` handshake.
    pub expect_continue: Duration,
    /// How long an idle pooled connection is kept before closing.
    pub idle_conn: Duration,
    /// Cap on idle connections across all hosts.
    pub max_all_idle_conns: usize,
    /// Cap on idle connections to a single host.
    pub max_host_idle_conns: usize,
    /// Time to wait for response headers, counted from the moment the whole
    /// request, body included, has been written to the connection.
    pub response_header: Duration,
    /// Maximum time for the TLS handshake.
    pub tls_handshake: Duration,
}

impl ClientSettings {
    #[inline]
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        limit(self.connect)
    }

    #[inline]
    #[must_use]
    pub fn keep_alive_interval(&self) -> Option<Duration> {
        limit(self.conn_keep_alive)
    }

    #[inline]
    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        limit(self.idle_conn)
    }

    #[inline]
    #[must_use]
    pub fn response_header_timeout(&self) -> Option<Duration> {
        limit(self.response_header)
    }

    #[inline]
    #[must_use]
    pub fn tls_handshake_timeout(&self) -> Option<Duration> {
        limit(self.tls_handshake)
    }

    /// Idle cap applied to a transport's pool.
    ///
    /// A cached transport only ever serves its own host, so the total cap
    /// bounds the per-host cap as well.
    #[must_use]
    pub fn pool_idle_per_host(&self) -> usize {
        let host = match self.max_host_idle_conns {
            0 => usize::MAX,
            n => n,
        };
        match self.max_all_idle_conns {
            0 => host,
            all => host.min(all),
        }
    }
}

#[inline]
fn limit(value: Duration) -> Option<Duration> {
    if value.is_zero() { None } else { Some(value) }
}
