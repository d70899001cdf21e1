//! Shared utilities for use cases.
//!
//! [`call_with_fallback`] is the one place the primary/fallback policy is
//! defined: run the provider-backed future under a bounded wait, and on any
//! [`ProviderError`] log it and produce the deterministic fallback instead.

use crate::ports::progress::{Operation, ProgressNotifier, ResultSource};
use crate::ports::provider_gateway::{
    ProviderError, ProviderGateway, ProviderRequest, StructuredResult,
};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

/// A value together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ResultSource,
}

impl<T> Resolved<T> {
    pub fn from_provider(value: T) -> Self {
        Self {
            value,
            source: ResultSource::Provider,
        }
    }

    pub fn from_cache(value: T) -> Self {
        Self {
            value,
            source: ResultSource::Cache,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Run `primary` with a bounded wait; on failure or timeout return
/// `fallback(&error)`.
///
/// Provider failures are logged here and never propagated. The timeout maps
/// to [`ProviderError::TransportFailure`].
pub async fn call_with_fallback<T, Fut, F>(
    operation: Operation,
    timeout: Duration,
    progress: &dyn ProgressNotifier,
    primary: Fut,
    fallback: F,
) -> Resolved<T>
where
    Fut: Future<Output = Result<T, ProviderError>>,
    F: FnOnce(&ProviderError) -> T,
{
    progress.on_provider_call_start(operation);

    let outcome = match tokio::time::timeout(timeout, primary).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::TransportFailure(format!(
            "timed out after {}ms",
            timeout.as_millis()
        ))),
    };

    let resolved = match outcome {
        Ok(value) => {
            debug!(operation = %operation, "Provider call succeeded");
            Resolved::from_provider(value)
        }
        Err(error) => {
            warn!(
                operation = %operation,
                kind = %error.kind(),
                "Provider call failed, serving fallback: {}",
                error
            );
            Resolved {
                value: fallback(&error),
                source: ResultSource::Fallback(error.kind()),
            }
        }
    };

    progress.on_provider_call_end(operation, resolved.source);
    resolved
}

/// Invoke the gateway unless it reports itself unavailable
pub(crate) async fn invoke_available(
    gateway: &dyn ProviderGateway,
    request: &ProviderRequest,
) -> Result<StructuredResult, ProviderError> {
    if !gateway.is_available() {
        debug!("Provider unavailable, skipping request");
        return Err(ProviderError::Unavailable);
    }
    gateway.invoke(request).await
}

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// Guards in this crate are never held across `.await`.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
