//! Application-level configuration.
//!
//! - [`DiscoveryParams`]: provider call control (bounded wait)

pub mod discovery_params;

pub use discovery_params::{DEFAULT_PROVIDER_TIMEOUT, DiscoveryParams};
