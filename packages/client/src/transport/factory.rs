//! Transport construction

use std::sync::Arc;

use super::{HttpTransport, SharedTransport};
use crate::config::ClientSettings;
use crate::error::Result;

/// Builds the transport a cache stores for a newly seen host.
pub trait TransportFactory: Send + Sync {
    /// # Errors
    ///
    /// Returns whatever error prevented the transport from being built.
    fn build(&self, settings: &ClientSettings) -> Result<SharedTransport>;
}

/// Factory producing [`HttpTransport`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransportFactory;

impl TransportFactory for HttpTransportFactory {
    fn build(&self, settings: &ClientSettings) -> Result<SharedTransport> {
        Ok(Arc::new(HttpTransport::new(settings)?))
    }
}

impl<F> TransportFactory for F
where
    F: Fn(&ClientSettings) -> Result<SharedTransport> + Send + Sync,
{
    fn build(&self, settings: &ClientSettings) -> Result<SharedTransport> {
        self(settings)
    }
}

/// Build a transport from `settings`, or from the defaults when `None`.
///
/// # Errors
///
/// Returns a configuration error if the settings are invalid or TLS setup
/// is rejected.
pub fn new_transport(settings: Option<&ClientSettings>) -> Result<HttpTransport> {
    match settings {
        Some(settings) => HttpTransport::new(settings),
        None => HttpTransport::new(&ClientSettings::default()),
    }
}
