//! Header setters for `ClientBuilder`

use http::{HeaderName, HeaderValue};
use hostpool_client::error;
use hostpool_client::http::merge_headers;

use crate::builder::core::ClientBuilder;
use crate::HeaderSet;

/// Header constants for common HTTP headers
pub mod header {
    pub use http::header::*;

    /// Custom X-API-Key header for API authentication
    pub const X_API_KEY: &str = "x-api-key";
}

impl ClientBuilder<'_> {
    /// Add a header to inject into every request.
    ///
    /// Repeating a name adds another value for it.
    ///
    /// # Examples
    /// ```no_run
    /// use hostpool::ClientBuilder;
    ///
    /// let client = ClientBuilder::new("https://auditr.io")
    ///     .header("x-tenant", "acme")
    ///     .header("accept", "application/json")
    ///     .build();
    /// ```
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        let name = match HeaderName::try_from(key) {
            Ok(name) => name,
            Err(e) => return self.fail(error::builder::<http::Error>(e.into())),
        };
        match HeaderValue::try_from(value) {
            Ok(value) => {
                self.headers.append(name, value);
                self
            }
            Err(e) => self.fail(error::builder::<http::Error>(e.into())),
        }
    }

    /// Merge a prepared header set; each name in `headers` replaces any
    /// values already set for it.
    pub fn headers(mut self, headers: &HeaderSet) -> Self {
        merge_headers(&mut self.headers, headers);
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent<V>(self, value: V) -> Self
    where
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.replace(header::USER_AGENT, value)
    }

    pub(crate) fn replace<V>(mut self, name: HeaderName, value: V) -> Self
    where
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        match HeaderValue::try_from(value) {
            Ok(value) => {
                self.headers.insert(name, value);
                self
            }
            Err(e) => self.fail(error::builder::<http::Error>(e.into())),
        }
    }
}
