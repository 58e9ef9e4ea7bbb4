//! Fluent client construction
//!
//! [`ClientBuilder`] collects the destination, the headers to inject and an
//! optional transport, then asks a [`TransportCache`](hostpool_client::TransportCache)
//! for the client.

pub mod auth;
pub mod core;
pub mod headers;

pub use self::core::ClientBuilder;
pub use self::headers::header;
