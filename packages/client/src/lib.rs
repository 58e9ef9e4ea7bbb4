//! # Hostpool client
//!
//! Per-host pooled HTTP transports with header-injecting clients.
//!
//! Every client built for the same origin shares one pooled transport, so
//! connections are reused across clients that differ only in the headers
//! they send. Each client wraps that shared transport in a decorator which
//! copies a fixed header set into every outgoing request.
//!
//! ## Features
//!
//! - **One transport per host**, built at most once even under concurrent
//!   first use
//! - **Header injection** on a fresh copy of each request; the caller's
//!   request keeps its headers
//! - **HTTP/2 via ALPN** with HTTP/1.1 fallback over rustls
//! - **Environment proxies** (`HTTP_PROXY`, `HTTPS_PROXY`, `NO_PROXY`)
//! - **Tunable pooling and timeouts** through [`ClientSettings`]
//!
//! ## Usage
//!
//! ```no_run
//! use hostpool_client::{TransportCache, http::header_set};
//!
//! # async fn run() -> hostpool_client::Result<()> {
//! let cache = TransportCache::new();
//! let headers = header_set([("authorization", "Bearer xxx")])?;
//! let client = cache.client("https://auditr.io", None, headers)?;
//!
//! let response = client.get("/v1/events").await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod config;
pub mod connect;
pub mod error;
pub mod http;
pub mod middleware;
pub mod transport;

pub mod prelude;

pub use crate::prelude::*;
pub use crate::transport::{HttpTransportFactory, new_transport};
