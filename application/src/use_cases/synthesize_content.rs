//! Content synthesis use case.
//!
//! Produces the family/scientist [`ContentPair`] for a project and caches it
//! per project id for the session. A fallback pair is cached too, so the
//! provider is only re-invoked through [`ContentSynthesizer::regenerate`].
//!
//! Each provider request is numbered per project. Only the latest request for
//! a project may write its cache entry; an older one resolving later is dropped.

use crate::config::DiscoveryParams;
use crate::ports::progress::{Operation, ProgressNotifier};
use crate::ports::provider_gateway::{ProviderError, ProviderGateway, ProviderRequest};
use crate::use_cases::shared::{Resolved, call_with_fallback, invoke_available, lock};
use nexus_domain::util::word_count;
use nexus_domain::{ContentPair, Project, ProjectId, PromptTemplate};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub struct ContentSynthesizer {
    gateway: Arc<dyn ProviderGateway>,
    params: DiscoveryParams,
    /// Session cache: at most one pair per project id
    cache: Mutex<HashMap<ProjectId, ContentPair>>,
    /// Latest request number issued per project id
    issued: Mutex<HashMap<ProjectId, u64>>,
}

impl ContentSynthesizer {
    pub fn new(gateway: Arc<dyn ProviderGateway>, params: DiscoveryParams) -> Self {
        Self {
            gateway,
            params,
            cache: Mutex::new(HashMap::new()),
            issued: Mutex::new(HashMap::new()),
        }
    }

    /// Cached pair for a project, if any
    pub fn cached(&self, id: &ProjectId) -> Option<ContentPair> {
        lock(&self.cache).get(id).cloned()
    }

    /// Return the cached pair, or synthesize and cache one.
    ///
    /// Returns `None` if a newer request for the same project was issued
    /// while this one was in flight. The superseded result is not cached.
    pub async fn synthesize(
        &self,
        project: &Project,
        progress: &dyn ProgressNotifier,
    ) -> Option<Resolved<ContentPair>> {
        if let Some(pair) = self.cached(&project.id) {
            debug!("Content cache hit for project {}", project.id);
            return Some(Resolved::from_cache(pair));
        }
        self.generate(project, progress).await
    }

    /// Drop any cached pair and invoke the provider again
    pub async fn regenerate(
        &self,
        project: &Project,
        progress: &dyn ProgressNotifier,
    ) -> Option<Resolved<ContentPair>> {
        info!("Regenerating content for project {}", project.id);
        lock(&self.cache).remove(&project.id);
        self.generate(project, progress).await
    }

    fn issue(&self, id: &ProjectId) -> u64 {
        let mut issued = lock(&self.issued);
        let number = issued.entry(id.clone()).or_insert(0);
        *number += 1;
        *number
    }

    async fn generate(
        &self,
        project: &Project,
        progress: &dyn ProgressNotifier,
    ) -> Option<Resolved<ContentPair>> {
        let number = self.issue(&project.id);
        let request = ProviderRequest::json(
            PromptTemplate::content_prompt(project),
            PromptTemplate::content_schema(),
        );

        let resolved = call_with_fallback(
            Operation::ContentSynthesis,
            self.params.provider_timeout,
            progress,
            async {
                let pair: ContentPair =
                    invoke_available(self.gateway.as_ref(), &request).await?.into_typed()?;
                if !pair.is_complete() {
                    return Err(ProviderError::MalformedResponse(
                        "content pair has an empty description".to_string(),
                    ));
                }
                Ok::<_, ProviderError>(pair)
            },
            |_| ContentPair::fallback_for(project),
        )
        .await;

        // `issued` stays locked until the cache write is done
        let issued = lock(&self.issued);
        if issued.get(&project.id).copied() != Some(number) {
            debug!(
                "Dropping superseded content for project {} (request {})",
                project.id, number
            );
            return None;
        }

        debug!(
            "Content for {}: {} family words, {} scientist words",
            project.id,
            word_count(&resolved.value.family),
            word_count(&resolved.value.scientist)
        );
        lock(&self.cache).insert(project.id.clone(), resolved.value.clone());
        drop(issued);
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::{NoProgress, ResultSource};
    use crate::ports::provider_gateway::ProviderErrorKind;
    use crate::use_cases::test_support::{ScriptedGateway, sample_corpus};
    use serde_json::json;
    use std::time::Duration;

    fn synthesizer(gateway: Arc<ScriptedGateway>) -> ContentSynthesizer {
        ContentSynthesizer::new(gateway, DiscoveryParams::default())
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let gateway = Arc::new(ScriptedGateway::new().then_json(json!({
            "family": "Your gift helps babies.",
            "scientist": "Neuroprotective adjunct to TH."
        })));
        let synthesizer = synthesizer(gateway.clone());
        let project = &sample_corpus()[0];

        let first = synthesizer.synthesize(project, &NoProgress).await.unwrap();
        let second = synthesizer.synthesize(project, &NoProgress).await.unwrap();

        assert_eq!(first.source, ResultSource::Provider);
        assert_eq!(second.source, ResultSource::Cache);
        assert_eq!(first.value, second.value);
        assert_eq!(gateway.calls(), 1);
        assert!(gateway.prompts()[0].contains("Pediatric HIE Neuroprotection"));
    }

    #[tokio::test]
    async fn test_malformed_response_yields_brief_pair() {
        let gateway = Arc::new(ScriptedGateway::new().then_text("not json at all"));
        let synthesizer = synthesizer(gateway);
        let project = &sample_corpus()[2];

        let resolved = synthesizer.synthesize(project, &NoProgress).await.unwrap();
        assert_eq!(
            resolved.source,
            ResultSource::Fallback(ProviderErrorKind::MalformedResponse)
        );
        assert_eq!(resolved.value.family, project.brief);
        assert_eq!(resolved.value.scientist, project.brief);
    }

    #[tokio::test]
    async fn test_empty_description_is_malformed() {
        let gateway = Arc::new(
            ScriptedGateway::new().then_json(json!({"family": "", "scientist": "x"})),
        );
        let project = &sample_corpus()[1];
        let resolved = synthesizer(gateway).synthesize(project, &NoProgress).await.unwrap();
        assert_eq!(resolved.value, ContentPair::fallback_for(project));
    }

    #[tokio::test]
    async fn test_fallback_is_cached_until_regenerate() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_error(ProviderError::TransportFailure("503".into()))
                .then_json(json!({"family": "warm", "scientist": "rigorous"})),
        );
        let synthesizer = synthesizer(gateway.clone());
        let project = &sample_corpus()[3];

        let first = synthesizer.synthesize(project, &NoProgress).await.unwrap();
        assert!(first.source.is_fallback());
        let again = synthesizer.synthesize(project, &NoProgress).await.unwrap();
        assert_eq!(again.source, ResultSource::Cache);
        assert_eq!(again.value, ContentPair::fallback_for(project));
        assert_eq!(gateway.calls(), 1);

        let retried = synthesizer.regenerate(project, &NoProgress).await.unwrap();
        assert_eq!(retried.source, ResultSource::Provider);
        assert_eq!(retried.value, ContentPair::new("warm", "rigorous"));
        assert_eq!(synthesizer.cached(&project.id), Some(retried.value));
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_is_keyed_per_project() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_json(json!({"family": "a-family", "scientist": "a-science"}))
                .then_json(json!({"family": "b-family", "scientist": "b-science"})),
        );
        let synthesizer = synthesizer(gateway.clone());
        let corpus = sample_corpus();

        synthesizer.synthesize(&corpus[0], &NoProgress).await;
        synthesizer.synthesize(&corpus[1], &NoProgress).await;
        let back = synthesizer.synthesize(&corpus[0], &NoProgress).await.unwrap();

        assert_eq!(back.source, ResultSource::Cache);
        assert_eq!(back.value.family, "a-family");
        assert!(synthesizer.cached(&corpus[1].id).is_some());
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_provider_caches_fallback_without_request() {
        let gateway = Arc::new(ScriptedGateway::unavailable());
        let synthesizer = synthesizer(gateway.clone());
        let project = &sample_corpus()[4];

        let resolved = synthesizer.synthesize(project, &NoProgress).await.unwrap();
        assert_eq!(
            resolved.source,
            ResultSource::Fallback(ProviderErrorKind::Unavailable)
        );
        assert_eq!(synthesizer.cached(&project.id), Some(ContentPair::fallback_for(project)));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_older_request_resolving_last_is_dropped() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_json_after(
                    Duration::from_secs(5),
                    json!({"family": "old-family", "scientist": "old-science"}),
                )
                .then_json_after(
                    Duration::from_secs(1),
                    json!({"family": "new-family", "scientist": "new-science"}),
                ),
        );
        let synthesizer = synthesizer(gateway.clone());
        let project = &sample_corpus()[0];

        let (older, newer) = tokio::join!(synthesizer.synthesize(project, &NoProgress), async {
            tokio::task::yield_now().await;
            synthesizer.regenerate(project, &NoProgress).await
        });

        assert_eq!(older, None);
        assert_eq!(
            newer.map(|resolved| resolved.value),
            Some(ContentPair::new("new-family", "new-science"))
        );
        assert_eq!(
            synthesizer.cached(&project.id),
            Some(ContentPair::new("new-family", "new-science"))
        );
        assert_eq!(gateway.calls(), 2);
    }
}
