//! # Hostpool
//!
//! Clients that share one pooled HTTP transport per host and inject a fixed
//! set of headers into every request they send.
//!
//! ```no_run
//! use hostpool::ClientBuilder;
//!
//! # async fn run() -> hostpool::Result<()> {
//! let client = ClientBuilder::new("https://auditr.io")
//!     .bearer_auth("xxx")
//!     .user_agent("auditr-agent/1.0")
//!     .build()?;
//!
//! let response = client.get("/v1/events").await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```
//!
//! Clients built without an explicit [`TransportCache`] use the process-wide
//! one returned by [`global_cache`].

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::OnceLock;

pub mod builder;

pub use builder::{ClientBuilder, header};

pub use hostpool_client::cache::{CacheStatsSnapshot, HostKey};
pub use hostpool_client::http::{body, header_set};
pub use hostpool_client::{
    ClientSettings, Error, HeaderInjector, HeaderSet, HttpClient, HttpRequest, HttpResponse,
    HttpTransport, HttpTransportFactory, Result, SharedTransport, Transport, TransportCache,
    TransportFactory, error,
};

static GLOBAL_CACHE: OnceLock<TransportCache> = OnceLock::new();

/// Process-wide transport cache built from the default settings.
///
/// Initialised on first use; its transports live for the rest of the process.
pub fn global_cache() -> &'static TransportCache {
    GLOBAL_CACHE.get_or_init(|| {
        tracing::debug!(target: "hostpool::cache", "Initialising process-wide transport cache");
        TransportCache::new()
    })
}

/// Build a client for `url` on the process-wide cache.
///
/// `transport` is stored for the host only if the host has no transport yet.
/// `None` headers means nothing is injected.
///
/// # Errors
///
/// Returns a builder error for a malformed URL or a configuration error if
/// the host's transport could not be built.
pub fn new_client(
    url: &str,
    transport: Option<SharedTransport>,
    headers: Option<HeaderSet>,
) -> Result<HttpClient> {
    global_cache().client(url, transport, headers.unwrap_or_default())
}

/// Build a standalone transport from `settings`, or the defaults when `None`.
///
/// # Errors
///
/// Returns a configuration error if the settings are invalid or TLS setup is
/// rejected.
pub fn new_transport(settings: Option<&ClientSettings>) -> Result<HttpTransport> {
    hostpool_client::new_transport(settings)
}

/// The settings transports are built from when none are given.
#[must_use]
pub fn default_settings() -> ClientSettings {
    ClientSettings::default()
}
