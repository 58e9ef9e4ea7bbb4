//! Default values for `ClientSettings`

use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

use super::types::ClientSettings;

pub const DEFAULT_CONNECT: Duration = Duration::from_secs(2);
pub const DEFAULT_EXPECT_CONTINUE: Duration = Duration::from_secs(1);
pub const DEFAULT_IDLE_CONN: Duration = Duration::from_secs(90);
pub const DEFAULT_CONN_KEEP_ALIVE: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_ALL_IDLE_CONNS: usize = 100;
pub const DEFAULT_RESPONSE_HEADER: Duration = Duration::from_secs(2);
pub const DEFAULT_TLS_HANDSHAKE: Duration = Duration::from_secs(2);

/// Per-host idle cap: available parallelism plus one.
#[must_use]
pub fn default_max_host_idle_conns() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get) + 1
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT,
            expect_continue: DEFAULT_EXPECT_CONTINUE,
            idle_conn: DEFAULT_IDLE_CONN,
            conn_keep_alive: DEFAULT_CONN_KEEP_ALIVE,
            max_all_idle_conns: DEFAULT_MAX_ALL_IDLE_CONNS,
            max_host_idle_conns: default_max_host_idle_conns(),
            response_header: DEFAULT_RESPONSE_HEADER,
            tls_handshake: DEFAULT_TLS_HANDSHAKE,
        }
    }
}
