//! Connection establishment for pooled transports
//!
//! The connector dials TCP, tunnels through an environment proxy when one
//! applies, and runs the TLS handshake with ALPN so the pool can speak
//! HTTP/2 whenever the server agrees.

pub mod connector;
pub mod proxy;
pub mod stream;
pub mod tls;

pub use connector::TransportConnector;
pub use proxy::ProxyPolicy;
pub use stream::MaybeTlsStream;
