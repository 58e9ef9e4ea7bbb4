//! Core `ClientBuilder` structure and terminal methods

use std::fmt;

use hostpool_client::{Error, HeaderSet, HttpClient, Result, SharedTransport, TransportCache};

use crate::global_cache;

/// Builder for an [`HttpClient`].
///
/// Invalid header names or values are remembered and reported by
/// [`build`](Self::build); later setters keep working but the first error
/// wins.
#[must_use]
pub struct ClientBuilder<'a> {
    pub(crate) url: String,
    pub(crate) headers: HeaderSet,
    pub(crate) transport: Option<SharedTransport>,
    pub(crate) cache: Option<&'a TransportCache>,
    pub(crate) error: Option<Error>,
}

impl<'a> ClientBuilder<'a> {
    /// Start a builder for clients of `url`'s host.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderSet::new(),
            transport: None,
            cache: None,
            error: None,
        }
    }

    /// Transport to store for the host if it has none yet.
    pub fn transport(mut self, transport: SharedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the host's transport in `cache` instead of the process-wide
    /// cache.
    pub fn cache(mut self, cache: &'a TransportCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub(crate) fn fail(mut self, err: Error) -> Self {
        if self.error.is_none() {
            tracing::debug!(target: "hostpool::builder", error = %err, "Client builder rejected input");
            self.error = Some(err);
        }
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns the first header error recorded by the setters, a builder
    /// error for a malformed URL, or the error raised while constructing the
    /// host's transport.
    pub fn build(self) -> Result<HttpClient> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let cache = match self.cache {
            Some(cache) => cache,
            None => global_cache(),
        };
        cache.client(&self.url, self.transport, self.headers)
    }
}

impl fmt::Debug for ClientBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("transport", &self.transport.is_some())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
