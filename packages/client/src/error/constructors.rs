use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a transport configuration error.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Configuration).with(e.into())
}

/// Creates an `Error` for a connect error.
pub fn connect<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e.into())
}

/// Creates an `Error` for a response-header timeout.
pub fn timeout<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Timeout).with(e.into())
}

/// Creates an `Error` for a request error.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e.into())
}

/// Creates an `Error` for a body error.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}

/// Creates an `Error` for a destination URL that could not be parsed.
pub fn invalid_url<E: Into<BoxError>>(e: E, raw: &str) -> Error {
    let err = Error::new(Kind::Builder).with(e.into());
    match url::Url::parse(raw) {
        Ok(url) => err.with_url(url),
        Err(_) => err,
    }
}

/// Classify a failure reported by the pooled hyper client.
pub fn from_client(err: hyper_util::client::legacy::Error) -> Error {
    if err.is_connect() {
        connect(err)
    } else {
        request(err)
    }
}
