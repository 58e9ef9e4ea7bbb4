//! Header-injecting decorator

use std::fmt;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::http::{HeaderSet, HttpRequest, HttpResponse, clone_request, merge_headers};
use crate::transport::{SharedTransport, Transport};

/// Adds a fixed header set to every request before delegating it.
///
/// The caller's request is never modified apart from its body, which moves
/// to the outgoing copy. For every name in the header set, the outgoing
/// request carries exactly the injected values; names outside the set are
/// left alone.
#[derive(Clone)]
pub struct HeaderInjector {
    inner: SharedTransport,
    headers: HeaderSet,
}

impl HeaderInjector {
    #[must_use]
    pub fn new(inner: SharedTransport, headers: HeaderSet) -> Self {
        Self { inner, headers }
    }

    /// Transport every request is delegated to.
    #[must_use]
    pub fn inner(&self) -> &SharedTransport {
        &self.inner
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Build the request that will actually be sent.
    ///
    /// `original` keeps its method, URI, version, headers and extensions;
    /// its body is left empty.
    pub fn prepare(&self, original: &mut HttpRequest) -> HttpRequest {
        let mut outgoing = clone_request(original);
        merge_headers(outgoing.headers_mut(), &self.headers);
        outgoing
    }

    /// Send a prepared copy of `original` through the inner transport.
    ///
    /// The inner transport's response or error is returned unchanged.
    pub fn send(&self, original: &mut HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
        let outgoing = self.prepare(original);
        tracing::trace!(
            target: "hostpool::middleware",
            method = %outgoing.method(),
            uri = %outgoing.uri(),
            injected = self.headers.keys_len(),
            "Delegating request with injected headers"
        );
        self.inner.round_trip(outgoing)
    }
}

impl Transport for HeaderInjector {
    fn round_trip(&self, mut request: HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
        self.send(&mut request)
    }
}

impl fmt::Debug for HeaderInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderInjector")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use http::{HeaderValue, Method, Request, header};

    use super::*;
    use crate::http::body;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<http::HeaderMap>>,
    }

    impl Transport for Recorder {
        fn round_trip(&self, request: HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
            self.seen.lock().unwrap().push(request.headers().clone());
            Box::pin(async { Ok(http::Response::new(body::empty())) })
        }
    }

    fn injector(recorder: &Arc<Recorder>, pairs: &[(&str, &str)]) -> HeaderInjector {
        let headers = crate::http::header_set(pairs.iter().copied()).unwrap();
        HeaderInjector::new(recorder.clone(), headers)
    }

    #[test]
    fn prepare_leaves_original_headers_untouched() {
        let recorder = Arc::new(Recorder::default());
        let injector = injector(&recorder, &[("authorization", "Bearer new")]);

        let mut original = Request::builder()
            .method(Method::POST)
            .uri("https://auditr.io/v1")
            .header(header::AUTHORIZATION, "Bearer old")
            .header(header::ACCEPT, "text/plain")
            .body(body::full("payload"))
            .unwrap();
        let outgoing = injector.prepare(&mut original);

        assert_eq!(outgoing.headers()[header::AUTHORIZATION], "Bearer new");
        assert_eq!(outgoing.headers()[header::ACCEPT], "text/plain");
        assert_eq!(original.headers()[header::AUTHORIZATION], "Bearer old");
        assert_eq!(outgoing.method(), Method::POST);
    }

    #[test]
    fn multi_valued_header_replaced_wholesale() {
        let recorder = Arc::new(Recorder::default());
        let injector = injector(&recorder, &[("x-tag", "a"), ("x-tag", "b")]);

        let mut original = Request::builder()
            .uri("http://auditr.io/")
            .header("x-tag", "old")
            .body(body::empty())
            .unwrap();
        tokio_test::block_on(injector.send(&mut original)).unwrap();

        let seen = recorder.seen.lock().unwrap();
        let values: Vec<&HeaderValue> = seen[0].get_all("x-tag").iter().collect();
        assert_eq!(values, [&HeaderValue::from_static("a"), &HeaderValue::from_static("b")]);
    }
}
