//! Transport settings
//!
//! [`ClientSettings`] is the immutable record of connection-level tunables a
//! transport is built from. The record is plain data: construct it with a
//! struct literal, start from [`ClientSettings::default`] and chain `with_*`
//! methods, then hand it to a factory.

pub mod core;
pub mod validation;

pub use self::core::{ClientSettings, DEFAULT_MAX_ALL_IDLE_CONNS, default_max_host_idle_conns};
pub use validation::{ConfigResult, ConfigurationError};
