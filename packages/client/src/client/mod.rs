//! Caller-facing client handles

pub mod core;

pub use self::core::HttpClient;
