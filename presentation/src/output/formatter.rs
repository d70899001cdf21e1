//! Output formatter trait

use nexus_application::{DetailView, OperationState, ResultSource, SearchSnapshot};
use nexus_domain::{PRESET_QUESTIONS, Project, SUGGESTED_QUERIES};
use serde_json::{Value, json};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// A search result set, projects already resolved in snapshot order
    fn search(&self, snapshot: &SearchSnapshot, projects: &[&Project]) -> String;

    /// One project with whatever the detail view currently holds
    fn detail(&self, project: &Project, view: &DetailView) -> String;

    /// The whole catalog
    fn projects(&self, projects: &[Project]) -> String;

    /// Suggested queries and preset questions
    fn suggestions(&self) -> String;
}

/// Machine-readable output (`--json`)
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn source(source: ResultSource) -> &'static str {
        match source {
            ResultSource::Provider => "provider",
            ResultSource::Cache => "cache",
            ResultSource::Fallback(_) => "fallback",
        }
    }

    fn state<T: serde::Serialize>(state: &OperationState<T>) -> Value {
        match state {
            OperationState::Idle => json!({"status": "idle"}),
            OperationState::Pending => json!({"status": "pending"}),
            OperationState::Succeeded(value) => json!({"status": "succeeded", "value": value}),
            OperationState::Failed { fallback, error } => json!({
                "status": "failed",
                "error": error.as_str(),
                "value": fallback,
            }),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn search(&self, snapshot: &SearchSnapshot, projects: &[&Project]) -> String {
        Self::render(json!({
            "query": snapshot.query,
            "message": snapshot.message,
            "broadened": snapshot.broadened,
            "intentSource": Self::source(snapshot.intent_source),
            "projects": projects,
        }))
    }

    fn detail(&self, project: &Project, view: &DetailView) -> String {
        Self::render(json!({
            "project": project,
            "audience": view.audience,
            "displayed": view.displayed_text(),
            "content": Self::state(&view.content),
            "qa": Self::state(&view.qa),
        }))
    }

    fn projects(&self, projects: &[Project]) -> String {
        Self::render(json!(projects))
    }

    fn suggestions(&self) -> String {
        Self::render(json!({
            "queries": SUGGESTED_QUERIES,
            "questions": PRESET_QUESTIONS,
        }))
    }
}
