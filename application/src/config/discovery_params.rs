//! Discovery parameters: provider call control.
//!
//! [`DiscoveryParams`] groups the static parameters shared by every
//! provider-backed use case. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bounded wait for one provider call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(12);

/// Provider call control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryParams {
    /// Maximum time to wait for the provider before treating the call as a
    /// transport failure and serving the fallback.
    pub provider_timeout: Duration,
}

impl Default for DiscoveryParams {
    fn default() -> Self {
        Self {
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl DiscoveryParams {
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }
}
