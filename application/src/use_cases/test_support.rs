//! Test doubles shared by the use case tests.

use crate::ports::provider_gateway::{
    ProviderError, ProviderGateway, ProviderRequest, StructuredResult,
};
use async_trait::async_trait;
use nexus_domain::{Category, Project, ProjectId, Researcher};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

struct Scripted {
    delay: Duration,
    reply: Result<StructuredResult, ProviderError>,
}

/// Gateway that replays scripted replies in order, optionally after a delay.
///
/// Counts only calls that would have reached the network.
pub(crate) struct ScriptedGateway {
    available: bool,
    replies: Mutex<VecDeque<Scripted>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            available: true,
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// No credential configured
    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    fn push(self, delay: Duration, reply: Result<StructuredResult, ProviderError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted { delay, reply });
        self
    }

    pub(crate) fn then_json(self, value: Value) -> Self {
        self.push(Duration::ZERO, Ok(StructuredResult::Json(value)))
    }

    pub(crate) fn then_json_after(self, delay: Duration, value: Value) -> Self {
        self.push(delay, Ok(StructuredResult::Json(value)))
    }

    pub(crate) fn then_text(self, text: &str) -> Self {
        self.push(Duration::ZERO, Ok(StructuredResult::Text(text.to_string())))
    }

    pub(crate) fn then_text_after(self, delay: Duration, text: &str) -> Self {
        self.push(delay, Ok(StructuredResult::Text(text.to_string())))
    }

    pub(crate) fn then_error(self, error: ProviderError) -> Self {
        self.push(Duration::ZERO, Err(error))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderGateway for ScriptedGateway {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn invoke(&self, request: &ProviderRequest) -> Result<StructuredResult, ProviderError> {
        if !self.available {
            return Err(ProviderError::Unavailable);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());

        let scripted = self.replies.lock().unwrap().pop_front();
        let Some(scripted) = scripted else {
            return Err(ProviderError::TransportFailure(
                "no scripted reply left".to_string(),
            ));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.reply
    }
}

pub(crate) fn project(id: &str, title: &str, brief: &str, category: Category) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        brief: brief.to_string(),
        category,
        researcher: Researcher {
            name: "Dr. Maya Chen".to_string(),
            title: "Professor of Neonatology".to_string(),
            institution: "UCSF".to_string(),
            verified: true,
        },
        funding_goal: 250_000.0,
        funding_raised: 90_000.0,
        backers_count: 40,
        milestones_completed: 1,
        total_milestones: 4,
        milestones: Vec::new(),
        impact_statement: None,
        budget_breakdown: Vec::new(),
    }
}

/// Six projects covering every category
pub(crate) fn sample_corpus() -> Vec<Project> {
    vec![
        project(
            "hie-neuro",
            "Pediatric HIE Neuroprotection",
            "Augmenting therapeutic hypothermia to protect the newborn brain.",
            Category::ClinicalTrial,
        ),
        project(
            "ds-cognition",
            "Down Syndrome Cognition Study",
            "Repurposing an approved drug to improve memory.",
            Category::DrugRepurposing,
        ),
        project(
            "aav-sma",
            "AAV Vector for SMA",
            "Delivering a working SMN1 copy to motor neurons.",
            Category::GeneTherapy,
        ),
        project(
            "synapse-atlas",
            "Synapse Atlas",
            "Mapping synapse formation in the developing cortex.",
            Category::BasicScience,
        ),
        project(
            "crispr-base",
            "CRISPR Base Editing for Rett",
            "Correcting MECP2 point mutations in vivo.",
            Category::GeneTherapy,
        ),
        project(
            "organoids",
            "Cortical Organoid Models",
            "Patient-derived organoids to model epilepsy.",
            Category::DiseaseModeling,
        ),
    ]
}
