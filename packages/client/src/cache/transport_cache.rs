//! Transport cache and client construction

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;

use super::cache_key::HostKey;
use super::cache_stats::{CacheStats, CacheStatsSnapshot};
use crate::client::HttpClient;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::http::HeaderSet;
use crate::middleware::HeaderInjector;
use crate::transport::{HttpTransportFactory, SharedTransport, TransportFactory};

/// Host-keyed store of shared transports.
pub struct TransportCache {
    transports: Mutex<HashMap<HostKey, SharedTransport>>,
    factory: Box<dyn TransportFactory>,
    settings: ClientSettings,
    stats: CacheStats,
}

impl TransportCache {
    /// Cache building [`HttpTransport`](crate::transport::HttpTransport)s
    /// from the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(ClientSettings::default())
    }

    /// Cache building `HttpTransport`s from `settings`.
    #[must_use]
    pub fn with_settings(settings: ClientSettings) -> Self {
        Self::with_factory(HttpTransportFactory, settings)
    }

    /// Cache building transports through `factory`.
    #[must_use]
    pub fn with_factory<F>(factory: F, settings: ClientSettings) -> Self
    where
        F: TransportFactory + 'static,
    {
        Self {
            transports: Mutex::new(HashMap::new()),
            factory: Box::new(factory),
            settings,
            stats: CacheStats::new(),
        }
    }

    /// Build a client for `url` whose requests carry `headers`.
    ///
    /// The client shares the transport cached for the URL's host. When the
    /// host has no entry yet, `transport` is stored if given; otherwise one
    /// is built from the cache's settings. A `transport` given for a host
    /// that already has an entry is ignored.
    ///
    /// # Errors
    ///
    /// Returns a builder error for a malformed URL, or the factory's error if
    /// the transport could not be built. Neither changes the cache.
    pub fn client(
        &self,
        url: &str,
        transport: Option<SharedTransport>,
        headers: HeaderSet,
    ) -> Result<HttpClient> {
        let (key, base_url) = HostKey::parse(url)?;
        let shared = self.resolve(&key, transport)?;
        let injector = HeaderInjector::new(shared, headers);
        Ok(HttpClient::new(base_url, key, injector))
    }

    fn resolve(&self, key: &HostKey, supplied: Option<SharedTransport>) -> Result<SharedTransport> {
        let mut transports = self.lock();

        if let Some(existing) = transports.get(key) {
            self.stats.record_hit();
            if supplied.is_some() {
                self.stats.record_ignored_override();
                tracing::debug!(
                    target: "hostpool::cache",
                    host = %key,
                    "Host already has a transport, ignoring the supplied one"
                );
            } else {
                tracing::debug!(target: "hostpool::cache", host = %key, "Transport cache hit");
            }
            return Ok(Arc::clone(existing));
        }

        self.stats.record_miss();
        let transport = match supplied {
            Some(transport) => {
                tracing::debug!(target: "hostpool::cache", host = %key, "Storing supplied transport");
                transport
            }
            None => {
                let transport = self.factory.build(&self.settings)?;
                self.stats.record_construction();
                tracing::debug!(target: "hostpool::cache", host = %key, "Constructed transport");
                transport
            }
        };

        transports.insert(key.clone(), Arc::clone(&transport));
        Ok(transport)
    }

    /// Transport cached for `url`'s host, if any.
    ///
    /// # Errors
    ///
    /// Returns a builder error for a malformed URL.
    pub fn get(&self, url: &str) -> Result<Option<SharedTransport>> {
        let (key, _) = HostKey::parse(url)?;
        Ok(self.lock().get(&key).cloned())
    }

    /// Whether `url`'s host has an entry. Malformed URLs have none.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        HostKey::parse(url).is_ok_and(|(key, _)| self.lock().contains_key(&key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Cached host keys, sorted.
    #[must_use]
    pub fn hosts(&self) -> Vec<HostKey> {
        let mut hosts: Vec<HostKey> = self.lock().keys().cloned().collect();
        hosts.sort();
        hosts
    }

    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    /// Settings handed to the factory for new hosts.
    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    // Insertion is the last step under the lock, so a poisoned map is never
    // half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<HostKey, SharedTransport>> {
        self.transports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TransportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransportCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportCache")
            .field("hosts", &self.hosts())
            .field("settings", &self.settings)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}
