pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{HostMissing, TimedOut, UnsupportedScheme};
pub use types::{Error, Inner, Kind, Result};

/// Boxed error used for connector failures and body errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
