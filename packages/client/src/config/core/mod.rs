//! Core settings types and default values
//!
//! - `types`: the `ClientSettings` record and derived limits
//! - `defaults`: the well-known default instance
//! - `builders`: fluent `with_*` methods

pub mod builders;
pub mod defaults;
pub mod types;

pub use defaults::{DEFAULT_MAX_ALL_IDLE_CONNS, default_max_host_idle_conns};
pub use types::ClientSettings;
