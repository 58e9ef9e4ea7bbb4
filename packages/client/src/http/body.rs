//! Boxed body type and constructors

use bytes::Bytes;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full};

use crate::error::{self, BoxError, Result};

/// Body carried by every request and response in this crate.
///
/// `Default` yields an empty body; a request whose body has been handed to a
/// transport is left holding one.
pub type Body = UnsyncBoxBody<Bytes, BoxError>;

/// An empty body.
#[must_use]
pub fn empty() -> Body {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// A body holding one buffer.
#[must_use]
pub fn full(bytes: impl Into<Bytes>) -> Body {
    Full::new(bytes.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Drain a body into one contiguous buffer.
///
/// # Errors
///
/// Returns a body error if reading a frame fails.
pub async fn to_bytes(body: Body) -> Result<Bytes> {
    body.collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(error::body)
}
