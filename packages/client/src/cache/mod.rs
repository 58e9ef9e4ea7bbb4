//! Per-host transport cache
//!
//! Clients for the same origin share one pooled transport. The cache maps a
//! [`HostKey`] to the transport built for it and never evicts: a transport
//! lives as long as the cache that owns it.
//!
//! The "is there an entry, build one if not, insert it" sequence runs under
//! one lock, so concurrent first-time callers for a host observe exactly one
//! factory invocation and share the resulting `Arc`.

pub mod cache_key;
pub mod cache_stats;
pub mod transport_cache;

pub use cache_key::HostKey;
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use transport_cache::TransportCache;
