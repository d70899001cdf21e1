//! Conversational Q&A use case.
//!
//! One free-form question about one project, answered in plain text. Each
//! question stands alone: no earlier exchanges are sent as context.

use crate::config::DiscoveryParams;
use crate::ports::progress::{Operation, ProgressNotifier};
use crate::ports::provider_gateway::{ProviderError, ProviderGateway, ProviderRequest};
use crate::use_cases::shared::{Resolved, call_with_fallback, invoke_available};
use nexus_domain::util::truncate_str;
use nexus_domain::{Project, ProjectQuestion, PromptTemplate, QA_FALLBACK_ANSWER};
use std::sync::Arc;
use tracing::debug;

pub struct ConversationalQa {
    gateway: Arc<dyn ProviderGateway>,
    params: DiscoveryParams,
}

impl ConversationalQa {
    pub fn new(gateway: Arc<dyn ProviderGateway>, params: DiscoveryParams) -> Self {
        Self { gateway, params }
    }

    /// Answer one question; falls back to a fixed empathetic sentence
    pub async fn answer(
        &self,
        project: &Project,
        question: &ProjectQuestion,
        progress: &dyn ProgressNotifier,
    ) -> Resolved<String> {
        debug!(
            "Answering question about {}: {}",
            project.id,
            truncate_str(question.content(), 100)
        );

        let request = ProviderRequest::text(PromptTemplate::question_prompt(project, question));

        call_with_fallback(
            Operation::QuestionAnswering,
            self.params.provider_timeout,
            progress,
            async {
                let answer = invoke_available(self.gateway.as_ref(), &request).await?.into_text()?;
                Ok::<_, ProviderError>(answer.trim().to_string())
            },
            |_| QA_FALLBACK_ANSWER.to_string(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::{NoProgress, ResultSource};
    use crate::ports::provider_gateway::ProviderErrorKind;
    use crate::use_cases::test_support::{ScriptedGateway, sample_corpus};

    fn question(text: &str) -> ProjectQuestion {
        ProjectQuestion::try_new(text).unwrap()
    }

    #[tokio::test]
    async fn test_answer_from_provider() {
        let gateway = Arc::new(
            ScriptedGateway::new().then_text("  Every month of delay matters for newborns.\n"),
        );
        let qa = ConversationalQa::new(gateway.clone(), DiscoveryParams::default());
        let project = &sample_corpus()[0];

        let resolved = qa
            .answer(project, &question("Why is funding urgent?"), &NoProgress)
            .await;

        assert_eq!(resolved.source, ResultSource::Provider);
        assert_eq!(resolved.value, "Every month of delay matters for newborns.");
        let prompt = &gateway.prompts()[0];
        assert!(prompt.contains("Why is funding urgent?"));
        assert!(prompt.contains("Dr. Maya Chen (UCSF)"));
        assert!(prompt.contains(&project.brief));
    }

    #[tokio::test]
    async fn test_blank_answer_falls_back() {
        let gateway = Arc::new(ScriptedGateway::new().then_text("   "));
        let qa = ConversationalQa::new(gateway, DiscoveryParams::default());
        let resolved = qa
            .answer(&sample_corpus()[0], &question("How?"), &NoProgress)
            .await;
        assert_eq!(resolved.value, QA_FALLBACK_ANSWER);
        assert_eq!(
            resolved.source,
            ResultSource::Fallback(ProviderErrorKind::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_each_question_is_independent() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_text("First answer.")
                .then_text("Second answer."),
        );
        let qa = ConversationalQa::new(gateway.clone(), DiscoveryParams::default());
        let project = &sample_corpus()[1];

        qa.answer(project, &question("How does this help patients?"), &NoProgress)
            .await;
        qa.answer(project, &question("What happens if this succeeds?"), &NoProgress)
            .await;

        let prompts = gateway.prompts();
        assert!(!prompts[1].contains("How does this help patients?"));
        assert!(!prompts[1].contains("First answer."));
    }

    #[tokio::test]
    async fn test_unavailable_provider() {
        let gateway = Arc::new(ScriptedGateway::unavailable());
        let qa = ConversationalQa::new(gateway.clone(), DiscoveryParams::default());
        let resolved = qa
            .answer(&sample_corpus()[0], &question("Why now?"), &NoProgress)
            .await;
        assert_eq!(resolved.value, QA_FALLBACK_ANSWER);
        assert_eq!(gateway.calls(), 0);
    }
}
