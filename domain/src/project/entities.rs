//! Project entities
//!
//! Projects are owned by the corpus. Everything downstream works with
//! `&Project` borrowed from it and never keeps a copy that could drift.

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Stable project identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        ProjectId::new(s)
    }
}

/// Principal investigator behind a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    pub name: String,
    pub title: String,
    pub institution: String,
    /// Affiliation and credentials checked by the platform
    #[serde(default)]
    pub verified: bool,
}

/// One line of a project's budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: String,
    pub amount: f64,
}

/// A fundable research project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub brief: String,
    pub category: Category,
    pub researcher: Researcher,
    pub funding_goal: f64,
    pub funding_raised: f64,
    #[serde(default)]
    pub backers_count: u32,
    #[serde(default)]
    pub milestones_completed: u32,
    #[serde(default)]
    pub total_milestones: u32,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub budget_breakdown: Vec<BudgetItem>,
}

impl Project {
    /// Text the relevance filter searches: title, brief and milestones,
    /// space-joined and lowercased.
    pub fn searchable_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.brief);
        for milestone in &self.milestones {
            text.push(' ');
            text.push_str(milestone);
        }
        text.to_lowercase()
    }

    /// Funding progress in percent, capped at 100
    pub fn percent_funded(&self) -> f64 {
        if self.funding_goal <= 0.0 {
            return 0.0;
        }
        (self.funding_raised / self.funding_goal * 100.0).min(100.0)
    }

    /// Non-negative funding amounts
    pub fn has_valid_funding(&self) -> bool {
        self.funding_goal >= 0.0 && self.funding_raised >= 0.0
    }
}
