//! Outbound request type and copy-on-write cloning

use std::mem;

use http::Request;

use super::body::Body;

/// Outbound request accepted by every transport.
pub type HttpRequest = Request<Body>;

/// Produce the request that is actually transmitted.
///
/// Method, URI, version and extensions are copied and the header map is
/// deep-copied into a fresh `HeaderMap`, so edits to the clone never reach
/// `original`. The body moves into the clone and `original` is left with an
/// empty body: whoever transmits the clone now owns releasing it.
#[must_use]
pub fn clone_request(original: &mut HttpRequest) -> HttpRequest {
    let body = mem::take(original.body_mut());

    let mut clone = Request::new(body);
    *clone.method_mut() = original.method().clone();
    *clone.uri_mut() = original.uri().clone();
    *clone.version_mut() = original.version();
    *clone.headers_mut() = original.headers().clone();
    *clone.extensions_mut() = original.extensions().clone();
    clone
}
