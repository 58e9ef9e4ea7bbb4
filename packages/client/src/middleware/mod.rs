//! Transport decorators
//!
//! Decorators wrap a [`SharedTransport`](crate::transport::SharedTransport)
//! and implement [`Transport`](crate::transport::Transport) themselves, so a
//! decorated transport can be passed anywhere an undecorated one is accepted.

pub mod headers;

pub use headers::HeaderInjector;
