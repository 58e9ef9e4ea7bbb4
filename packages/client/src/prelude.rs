//! Hostpool prelude
//!
//! The types most callers need to build clients and send requests.

pub use crate::cache::{HostKey, TransportCache};
pub use crate::client::HttpClient;
pub use crate::config::ClientSettings;
pub use crate::error::{Error, Result};
pub use crate::http::{Body, HeaderSet, HttpRequest, HttpResponse};
pub use crate::middleware::HeaderInjector;
pub use crate::transport::{HttpTransport, SharedTransport, Transport, TransportFactory};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Version};

pub use url::Url;
