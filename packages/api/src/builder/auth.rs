//! Authentication headers for `ClientBuilder`
//!
//! Credentials are marked sensitive so they are redacted from `Debug`
//! output of the injected header set.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{HeaderName, HeaderValue};
use hostpool_client::error;

use crate::builder::core::ClientBuilder;
use crate::builder::headers::header;

impl ClientBuilder<'_> {
    /// Inject `Authorization: Bearer <token>`.
    ///
    /// # Examples
    /// ```no_run
    /// use hostpool::ClientBuilder;
    ///
    /// let client = ClientBuilder::new("https://auditr.io")
    ///     .bearer_auth("xxx")
    ///     .build();
    /// ```
    pub fn bearer_auth(self, token: &str) -> Self {
        self.credential(header::AUTHORIZATION, &format!("Bearer {token}"))
    }

    /// Inject `Authorization: Basic <base64(user:pass)>`.
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        self.credential(header::AUTHORIZATION, &format!("Basic {encoded}"))
    }

    /// Inject an `X-API-Key` header.
    pub fn api_key(self, key: &str) -> Self {
        self.credential(HeaderName::from_static(header::X_API_KEY), key)
    }

    fn credential(self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.replace(name, value)
            }
            Err(e) => self.fail(error::builder(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hostpool_client::{ClientSettings, Result, SharedTransport, TransportCache};

    use super::*;
    use crate::builder::tests::Stub;

    fn cache() -> TransportCache {
        TransportCache::with_factory(
            |_: &ClientSettings| -> Result<SharedTransport> { Ok(Arc::new(Stub)) },
            ClientSettings::default(),
        )
    }

    #[test]
    fn basic_auth_is_base64_encoded() {
        let cache = cache();
        let client = ClientBuilder::new("https://auditr.io")
            .cache(&cache)
            .basic_auth("Aladdin", "open sesame")
            .build()
            .unwrap();

        let value = &client.headers()[header::AUTHORIZATION];
        assert_eq!(value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert!(value.is_sensitive());
    }

    #[test]
    fn later_credentials_replace_earlier_ones() {
        let cache = cache();
        let client = ClientBuilder::new("https://auditr.io")
            .cache(&cache)
            .bearer_auth("old")
            .bearer_auth("new")
            .api_key("k-123")
            .build()
            .unwrap();

        let values: Vec<_> = client.headers().get_all(header::AUTHORIZATION).iter().collect();
        assert_eq!(values, ["Bearer new"]);
        assert_eq!(client.headers()[header::X_API_KEY], "k-123");
    }

    #[test]
    fn control_characters_in_token_fail_the_build() {
        let cache = cache();
        let err = ClientBuilder::new("https://auditr.io")
            .cache(&cache)
            .bearer_auth("bad\ntoken")
            .build()
            .unwrap_err();
        assert!(err.is_builder());
        assert!(cache.is_empty());
    }
}
