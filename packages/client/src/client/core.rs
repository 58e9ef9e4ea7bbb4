//! Client bound to one host's shared transport
//!
//! An [`HttpClient`] is what [`TransportCache::client`](crate::cache::TransportCache::client)
//! hands out. It sends every request through its own [`HeaderInjector`],
//! which delegates to the transport shared by all clients of the same host.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use http::{Method, Request, Uri};
use url::Url;

use crate::cache::HostKey;
use crate::error::{self, Result};
use crate::http::{HeaderSet, HttpRequest, HttpResponse, body};
use crate::middleware::HeaderInjector;
use crate::transport::SharedTransport;

/// Handle issuing requests for one host. Cheap to clone.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Arc<Url>,
    host: HostKey,
    injector: Arc<HeaderInjector>,
}

impl HttpClient {
    pub(crate) fn new(base_url: Url, host: HostKey, injector: HeaderInjector) -> Self {
        Self {
            base_url: Arc::new(base_url),
            host,
            injector: Arc::new(injector),
        }
    }

    /// Send `request` with this client's headers injected.
    ///
    /// The request's body is consumed; everything else about it is left as
    /// it was, so the caller can inspect or resend it.
    pub fn send(&self, request: &mut HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
        self.injector.send(request)
    }

    /// Send an owned request.
    pub fn execute(&self, mut request: HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
        self.injector.send(&mut request)
    }

    /// Build a request with an empty body for `path_or_url`.
    ///
    /// Relative paths resolve against the base URL this client was built
    /// for. Absolute URLs must name the same origin: this client's headers
    /// and pooled connections belong to its host only.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the target cannot be resolved to a URI or
    /// resolves to a different origin.
    pub fn request(&self, method: Method, path_or_url: &str) -> Result<HttpRequest> {
        let target = self
            .base_url
            .join(path_or_url)
            .map_err(|e| error::invalid_url(e, path_or_url))?;
        if HostKey::from_url(&target)? != self.host {
            return Err(error::builder(ForeignOrigin(self.host.clone())).with_url(target));
        }
        let uri = Uri::try_from(target.as_str()).map_err(|e| error::builder(e).with_url(target.clone()))?;

        Request::builder()
            .method(method)
            .uri(uri)
            .body(body::empty())
            .map_err(error::builder)
    }

    /// `GET` `path_or_url`.
    ///
    /// # Errors
    ///
    /// Returns a builder error for an unresolvable target, or whatever the
    /// transport reports.
    pub async fn get(&self, path_or_url: &str) -> Result<HttpResponse> {
        let request = self.request(Method::GET, path_or_url)?;
        self.execute(request).await
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cache key of the host this client is bound to.
    #[must_use]
    pub fn host(&self) -> &HostKey {
        &self.host
    }

    /// Headers injected into every request.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        self.injector.headers()
    }

    /// The shared, undecorated transport of this client's host.
    #[must_use]
    pub fn transport(&self) -> &SharedTransport {
        self.injector.inner()
    }
}

/// Target of a request lies outside the client's origin.
#[derive(Debug)]
struct ForeignOrigin(HostKey);

impl fmt::Display for ForeignOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target is not on this client's origin ({})", self.0)
    }
}

impl std::error::Error for ForeignOrigin {}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("host", &self.host)
            .field("headers", self.headers())
            .finish_non_exhaustive()
    }
}
