//! Single-turn question answering about one project

use crate::core::input::ProjectQuestion;
use crate::project::entities::ProjectId;
use serde::{Deserialize, Serialize};

/// Answer served when the provider cannot be reached or says nothing
pub const QA_FALLBACK_ANSWER: &str = "I can't connect to the live AI right now, but this project is critical because it addresses a significant gap in current treatment options. Funding now accelerates the timeline to clinical trials.";

/// Questions offered as one-tap prompts
pub const PRESET_QUESTIONS: [&str; 3] = [
    "How does this help patients?",
    "Why is funding urgent?",
    "What happens if this succeeds?",
];

/// A question and its answer, scoped to the project that was open.
///
/// Not kept once another project is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaExchange {
    pub project_id: ProjectId,
    pub question: String,
    pub answer: String,
}

impl QaExchange {
    pub fn new(project_id: ProjectId, question: ProjectQuestion, answer: impl Into<String>) -> Self {
        Self {
            project_id,
            question: question.into_content(),
            answer: answer.into(),
        }
    }
}
