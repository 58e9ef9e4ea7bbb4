//! Proxy selection from the process environment
//!
//! `HTTP_PROXY`, `HTTPS_PROXY`, `ALL_PROXY` and `NO_PROXY` (either case) are
//! read once, when a transport is built. Loopback destinations are never
//! proxied.

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

use http::Uri;
use hyper_util::client::proxy::matcher::{Intercept, Matcher};

/// Decides whether a destination is reached through a proxy.
#[derive(Clone)]
pub struct ProxyPolicy {
    matcher: Option<Arc<Matcher>>,
}

impl ProxyPolicy {
    /// Policy built from the proxy environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            matcher: Some(Arc::new(Matcher::from_env())),
        }
    }

    /// Policy built from an explicit matcher, e.g. one assembled with
    /// `Matcher::builder()`.
    #[must_use]
    pub fn with_matcher(matcher: Matcher) -> Self {
        Self {
            matcher: Some(Arc::new(matcher)),
        }
    }

    /// Policy that always connects directly.
    #[must_use]
    pub fn direct() -> Self {
        Self { matcher: None }
    }

    /// The proxy to use for `dst`, if any.
    #[must_use]
    pub fn intercept(&self, dst: &Uri) -> Option<Intercept> {
        if is_loopback(dst) {
            return None;
        }
        self.matcher.as_ref()?.intercept(dst)
    }
}

impl fmt::Debug for ProxyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyPolicy")
            .field("from_env", &self.matcher.is_some())
            .finish()
    }
}

/// `localhost` or a loopback IP literal.
#[must_use]
pub fn is_loopback(dst: &Uri) -> bool {
    let Some(host) = dst.host() else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}
