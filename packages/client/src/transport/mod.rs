//! Transport capability and its production implementation
//!
//! A transport owns a connection pool and turns one request into one
//! response. Everything that sends requests in this crate goes through the
//! [`Transport`] trait, so decorated and undecorated transports are
//! interchangeable.

mod deadline;
pub mod factory;
pub mod http;

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

pub use self::factory::{HttpTransportFactory, TransportFactory, new_transport};
pub use self::http::HttpTransport;

/// Sends a request and resolves to its response.
///
/// Implementations must be safe to share between tasks; the returned future
/// owns everything it needs, so it can outlive the borrow of `self`.
pub trait Transport: Send + Sync + 'static {
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'static, Result<HttpResponse>>;
}

/// Handle to a transport shared by every client of one host.
pub type SharedTransport = Arc<dyn Transport>;
