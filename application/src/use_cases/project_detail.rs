//! Project detail session.
//!
//! Ties content synthesis and Q&A to the currently open project. Opening a
//! project issues a [`SelectionTicket`]; operations resolve against it:
//!
//! - content is applied while the ticket's project is still the one shown and
//!   no newer content request for that project was issued
//! - an answer is applied only if no other selection happened since it was asked
//!
//! Anything else is discarded at resolution time. Nothing is cancelled.

use crate::ports::progress::ProgressNotifier;
use crate::use_cases::answer_question::ConversationalQa;
use crate::use_cases::operation_state::OperationState;
use crate::use_cases::selection::{SelectionTicket, SelectionTracker};
use crate::use_cases::shared::{Resolved, lock};
use crate::use_cases::synthesize_content::ContentSynthesizer;
use nexus_domain::{AudienceMode, ContentPair, Project, ProjectId, ProjectQuestion, QaExchange};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when asking a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QaError {
    #[error("Question cannot be empty")]
    UserInputEmpty,

    #[error("A question is already being answered")]
    QuestionPending,

    #[error("No project is open")]
    NoProjectOpen,
}

/// What the detail view shows for the open project
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailView {
    pub audience: AudienceMode,
    pub content: OperationState<ContentPair>,
    pub qa: OperationState<QaExchange>,
}

impl DetailView {
    fn opened() -> Self {
        Self {
            audience: AudienceMode::Family,
            content: OperationState::Pending,
            qa: OperationState::Idle,
        }
    }

    /// The description for the selected audience, once available
    pub fn displayed_text(&self) -> Option<&str> {
        self.content
            .value()
            .map(|pair| pair.for_audience(self.audience))
    }
}

pub struct ProjectDetailSession {
    synthesizer: Arc<ContentSynthesizer>,
    qa: Arc<ConversationalQa>,
    selection: SelectionTracker,
    view: Mutex<DetailView>,
}

impl ProjectDetailSession {
    pub fn new(synthesizer: Arc<ContentSynthesizer>, qa: Arc<ConversationalQa>) -> Self {
        Self {
            synthesizer,
            qa,
            selection: SelectionTracker::new(),
            view: Mutex::new(DetailView::default()),
        }
    }

    /// Open a project. Resets the audience to family and clears Q&A.
    pub fn open(&self, project: &Project) -> SelectionTicket {
        let ticket = self.selection.select(project.id.clone());
        *lock(&self.view) = DetailView::opened();
        debug!(
            "Opened project {} (generation {})",
            project.id,
            ticket.generation()
        );
        ticket
    }

    pub fn close(&self) {
        self.selection.clear();
        *lock(&self.view) = DetailView::default();
    }

    pub fn current(&self) -> Option<ProjectId> {
        self.selection.current()
    }

    pub fn view(&self) -> DetailView {
        lock(&self.view).clone()
    }

    pub fn set_audience(&self, audience: AudienceMode) {
        lock(&self.view).audience = audience;
    }

    pub fn displayed_text(&self) -> Option<String> {
        lock(&self.view).displayed_text().map(str::to_string)
    }

    /// Load content for the project the ticket was issued for.
    ///
    /// Returns `None` when another project is shown by the time it resolves,
    /// or when a newer request for the same project superseded this one.
    pub async fn load_content(
        &self,
        ticket: &SelectionTicket,
        project: &Project,
        progress: &dyn ProgressNotifier,
    ) -> Option<ContentPair> {
        let resolved = self.synthesizer.synthesize(project, progress).await;
        self.apply_content(ticket, resolved)
    }

    /// Explicit retry: bypasses the cache
    pub async fn retry_content(
        &self,
        ticket: &SelectionTicket,
        project: &Project,
        progress: &dyn ProgressNotifier,
    ) -> Option<ContentPair> {
        if self.selection.shows(ticket.project_id()) {
            lock(&self.view).content = OperationState::Pending;
        }
        let resolved = self.synthesizer.regenerate(project, progress).await;
        self.apply_content(ticket, resolved)
    }

    fn apply_content(
        &self,
        ticket: &SelectionTicket,
        resolved: Option<Resolved<ContentPair>>,
    ) -> Option<ContentPair> {
        let resolved = resolved?;
        if !self.selection.shows(ticket.project_id()) {
            debug!(
                "Discarding stale content for project {}",
                ticket.project_id()
            );
            return None;
        }
        let pair = resolved.value.clone();
        lock(&self.view).content = OperationState::from(resolved);
        Some(pair)
    }

    /// Ask one question about the open project.
    ///
    /// Rejects blank input and a second question while one is pending.
    /// Returns `Ok(None)` if another project was opened before the answer arrived.
    pub async fn ask(
        &self,
        ticket: &SelectionTicket,
        project: &Project,
        raw: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<Option<QaExchange>, QaError> {
        let question = ProjectQuestion::try_new(raw).map_err(|_| QaError::UserInputEmpty)?;

        if !self.selection.is_current(ticket) {
            return Err(QaError::NoProjectOpen);
        }

        {
            let mut view = lock(&self.view);
            if view.qa.is_pending() {
                return Err(QaError::QuestionPending);
            }
            view.qa = OperationState::Pending;
        }

        let resolved = self.qa.answer(project, &question, progress).await;

        if !self.selection.is_current(ticket) {
            debug!(
                "Discarding stale answer for project {}",
                ticket.project_id()
            );
            return Ok(None);
        }

        let resolved = resolved.map(|answer| QaExchange::new(project.id.clone(), question, answer));
        let exchange = resolved.value.clone();
        lock(&self.view).qa = OperationState::from(resolved);
        Ok(Some(exchange))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscoveryParams;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::operation_state::OperationStatus;
    use crate::use_cases::test_support::{ScriptedGateway, sample_corpus};
    use nexus_domain::QA_FALLBACK_ANSWER;
    use serde_json::json;
    use std::time::Duration;

    fn session(gateway: Arc<ScriptedGateway>) -> (ProjectDetailSession, Arc<ContentSynthesizer>) {
        let params = DiscoveryParams::default().with_provider_timeout(Duration::from_secs(30));
        let synthesizer = Arc::new(ContentSynthesizer::new(gateway.clone(), params.clone()));
        let qa = Arc::new(ConversationalQa::new(gateway, params));
        (ProjectDetailSession::new(synthesizer.clone(), qa), synthesizer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_project_discards_pending_content() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_json_after(
                    Duration::from_secs(3),
                    json!({"family": "a-family", "scientist": "a-science"}),
                )
                .then_json(json!({"family": "b-family", "scientist": "b-science"})),
        );
        let (session, synthesizer) = session(gateway.clone());
        let corpus = sample_corpus();

        let first = session.open(&corpus[0]);
        let (stale, fresh) = tokio::join!(
            session.load_content(&first, &corpus[0], &NoProgress),
            async {
                tokio::task::yield_now().await;
                let second = session.open(&corpus[1]);
                session.load_content(&second, &corpus[1], &NoProgress).await
            }
        );

        assert_eq!(stale, None);
        assert_eq!(fresh, Some(ContentPair::new("b-family", "b-science")));
        assert_eq!(session.current(), Some(corpus[1].id.clone()));
        assert_eq!(session.displayed_text().as_deref(), Some("b-family"));
        // The late pair is still cached for its own project
        assert_eq!(
            synthesizer.cached(&corpus[0].id),
            Some(ContentPair::new("a-family", "a-science"))
        );
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_open_resets_audience_and_qa() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_json(json!({"family": "warm", "scientist": "rigorous"}))
                .then_text("Because newborns cannot wait."),
        );
        let (session, _) = session(gateway);
        let corpus = sample_corpus();

        let ticket = session.open(&corpus[0]);
        session.load_content(&ticket, &corpus[0], &NoProgress).await;
        session.set_audience(AudienceMode::Scientist);
        assert_eq!(session.displayed_text().as_deref(), Some("rigorous"));

        let exchange = session
            .ask(&ticket, &corpus[0], "Why is funding urgent?", &NoProgress)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(exchange.answer, "Because newborns cannot wait.");
        assert_eq!(session.view().qa.status(), OperationStatus::Succeeded);

        session.open(&corpus[1]);
        let view = session.view();
        assert_eq!(view.audience, AudienceMode::Family);
        assert_eq!(view.qa, OperationState::Idle);
        assert!(view.content.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_question_while_pending_is_rejected() {
        let gateway = Arc::new(
            ScriptedGateway::new().then_text_after(Duration::from_secs(2), "It helps."),
        );
        let (session, _) = session(gateway.clone());
        let project = &sample_corpus()[2];
        let ticket = session.open(project);

        let (first, second) = tokio::join!(
            session.ask(&ticket, project, "How does this help patients?", &NoProgress),
            async {
                tokio::task::yield_now().await;
                session.ask(&ticket, project, "Why now?", &NoProgress).await
            }
        );

        assert_eq!(first.unwrap().unwrap().answer, "It helps.");
        assert_eq!(second, Err(QaError::QuestionPending));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_for_previous_project_is_discarded() {
        let gateway = Arc::new(
            ScriptedGateway::new().then_text_after(Duration::from_secs(2), "Late answer."),
        );
        let (session, _) = session(gateway);
        let corpus = sample_corpus();
        let ticket = session.open(&corpus[0]);

        let (answer, _) = tokio::join!(
            session.ask(&ticket, &corpus[0], "Why is funding urgent?", &NoProgress),
            async {
                tokio::task::yield_now().await;
                session.open(&corpus[1]);
            }
        );

        assert_eq!(answer, Ok(None));
        assert_eq!(session.view().qa, OperationState::Idle);
    }

    #[tokio::test]
    async fn test_blank_question_issues_nothing() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (session, _) = session(gateway.clone());
        let project = &sample_corpus()[0];
        let ticket = session.open(project);

        let result = session.ask(&ticket, project, "  \n", &NoProgress).await;
        assert_eq!(result, Err(QaError::UserInputEmpty));
        assert_eq!(gateway.calls(), 0);
        assert_eq!(session.view().qa, OperationState::Idle);
    }

    #[tokio::test]
    async fn test_ask_after_close_is_rejected() {
        let (session, _) = session(Arc::new(ScriptedGateway::new()));
        let project = &sample_corpus()[0];
        let ticket = session.open(project);
        session.close();

        let result = session.ask(&ticket, project, "Why?", &NoProgress).await;
        assert_eq!(result, Err(QaError::NoProjectOpen));
    }

    #[tokio::test]
    async fn test_failed_answer_shows_fallback() {
        let (session, _) = session(Arc::new(ScriptedGateway::unavailable()));
        let project = &sample_corpus()[0];
        let ticket = session.open(project);

        let exchange = session
            .ask(&ticket, project, "Why?", &NoProgress)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(exchange.answer, QA_FALLBACK_ANSWER);
        assert_eq!(session.view().qa.status(), OperationStatus::Failed);
    }

    #[tokio::test]
    async fn test_retry_replaces_fallback_content() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_error(crate::ports::provider_gateway::ProviderError::TransportFailure(
                    "502".into(),
                ))
                .then_json(json!({"family": "warm", "scientist": "rigorous"})),
        );
        let (session, _) = session(gateway);
        let project = &sample_corpus()[5];
        let ticket = session.open(project);

        session.load_content(&ticket, project, &NoProgress).await;
        assert_eq!(session.displayed_text(), Some(project.brief.clone()));
        assert_eq!(session.view().content.status(), OperationStatus::Failed);

        // Reopening serves the cached fallback without a new call
        let ticket = session.open(project);
        session.load_content(&ticket, project, &NoProgress).await;
        assert_eq!(session.displayed_text(), Some(project.brief.clone()));

        session.retry_content(&ticket, project, &NoProgress).await;
        assert_eq!(session.displayed_text().as_deref(), Some("warm"));
        assert_eq!(session.view().content.status(), OperationStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopened_project_keeps_newest_content() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .then_json_after(
                    Duration::from_secs(5),
                    json!({"family": "old-a", "scientist": "old-a-science"}),
                )
                .then_json(json!({"family": "b-family", "scientist": "b-science"}))
                .then_json_after(
                    Duration::from_secs(1),
                    json!({"family": "new-a", "scientist": "new-a-science"}),
                ),
        );
        let (session, synthesizer) = session(gateway.clone());
        let corpus = sample_corpus();

        let first = session.open(&corpus[0]);
        let (older, _, newer) = tokio::join!(
            session.load_content(&first, &corpus[0], &NoProgress),
            async {
                tokio::task::yield_now().await;
                let second = session.open(&corpus[1]);
                session.load_content(&second, &corpus[1], &NoProgress).await
            },
            async {
                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                let third = session.open(&corpus[0]);
                session.load_content(&third, &corpus[0], &NoProgress).await
            }
        );

        assert_eq!(older, None);
        assert_eq!(newer, Some(ContentPair::new("new-a", "new-a-science")));
        assert_eq!(session.current(), Some(corpus[0].id.clone()));
        assert_eq!(session.displayed_text().as_deref(), Some("new-a"));
        assert_eq!(
            synthesizer.cached(&corpus[0].id),
            Some(ContentPair::new("new-a", "new-a-science"))
        );
        assert_eq!(gateway.calls(), 3);
    }
}
