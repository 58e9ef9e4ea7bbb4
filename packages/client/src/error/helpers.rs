use std::fmt;

/// A marker type to indicate that an operation timed out.
#[derive(Debug)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl std::error::Error for TimedOut {}

/// A marker type to indicate that a URL has no host to route to.
#[derive(Debug)]
pub struct HostMissing;

impl fmt::Display for HostMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("url has no host")
    }
}

impl std::error::Error for HostMissing {}

/// A marker type to indicate that a URL's scheme cannot be served by an HTTP
/// transport.
#[derive(Debug)]
pub struct UnsupportedScheme;

impl fmt::Display for UnsupportedScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("url scheme is not http or https")
    }
}

impl std::error::Error for UnsupportedScheme {}
