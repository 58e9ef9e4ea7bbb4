//! Host keys for the transport cache

use std::fmt;

use url::Url;

use crate::error::{self, HostMissing, Result, UnsupportedScheme};

/// Origin of a destination URL: scheme, host and port.
///
/// The port is omitted when it is the scheme's default, so
/// `https://auditr.io/a` and `https://auditr.io:443/b?q=1` share a key while
/// `http://auditr.io` and `https://auditr.io` do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostKey(String);

impl HostKey {
    /// Parse `raw` and derive its key.
    ///
    /// # Errors
    ///
    /// Returns a builder error if `raw` is not an absolute `http` or `https`
    /// URL with a host.
    pub fn parse(raw: &str) -> Result<(Self, Url)> {
        let url = Url::parse(raw).map_err(|e| error::invalid_url(e, raw))?;
        let key = Self::from_url(&url)?;
        Ok((key, url))
    }

    /// # Errors
    ///
    /// Returns a builder error if `url` is not `http` or `https`, or has no
    /// host.
    pub fn from_url(url: &Url) -> Result<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(error::invalid_url(UnsupportedScheme, url.as_str()));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(error::invalid_url(HostMissing, url.as_str()));
        }
        Ok(Self(url.origin().ascii_serialization()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
