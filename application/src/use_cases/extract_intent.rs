//! Query intent extraction.
//!
//! Asks the provider to interpret the query; any provider failure hands the
//! query to the local [`FallbackIntentHeuristic`] instead. Callers get the
//! same [`Intent`] shape either way.

use crate::config::DiscoveryParams;
use crate::ports::progress::{Operation, ProgressNotifier};
use crate::ports::provider_gateway::{ProviderError, ProviderGateway, ProviderRequest};
use crate::use_cases::shared::{Resolved, call_with_fallback, invoke_available};
use nexus_domain::util::truncate_str;
use nexus_domain::{FallbackIntentHeuristic, Intent, IntentPayload, PromptTemplate, SearchQuery};
use std::sync::Arc;
use tracing::debug;

pub struct QueryIntentExtractor {
    gateway: Arc<dyn ProviderGateway>,
    heuristic: FallbackIntentHeuristic,
    params: DiscoveryParams,
}

impl QueryIntentExtractor {
    pub fn new(gateway: Arc<dyn ProviderGateway>, params: DiscoveryParams) -> Self {
        Self {
            gateway,
            heuristic: FallbackIntentHeuristic::default(),
            params,
        }
    }

    /// Turn a non-blank query into an intent
    pub async fn extract(
        &self,
        query: &SearchQuery,
        progress: &dyn ProgressNotifier,
    ) -> Resolved<Intent> {
        debug!("Extracting intent for: {}", truncate_str(query.text(), 100));

        let request =
            ProviderRequest::json(PromptTemplate::intent_prompt(query), PromptTemplate::intent_schema());

        call_with_fallback(
            Operation::Search,
            self.params.provider_timeout,
            progress,
            async {
                let payload: IntentPayload = invoke_available(self.gateway.as_ref(), &request).await?.into_typed()?;
                Ok::<_, ProviderError>(payload.into_intent())
            },
            |_| self.heuristic.extract(query),
        )
        .await
    }
}
