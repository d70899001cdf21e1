//! Dual-audience project descriptions

use crate::project::entities::Project;
use serde::{Deserialize, Serialize};

/// Which description the reader has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceMode {
    /// Warm, jargon-free; shown first whenever a project is opened
    #[default]
    Family,
    /// Technical, for researchers and clinicians
    Scientist,
}

impl AudienceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceMode::Family => "family",
            AudienceMode::Scientist => "scientist",
        }
    }

    /// Heading shown above the description
    pub fn label(&self) -> &'static str {
        match self {
            AudienceMode::Family => "For Families",
            AudienceMode::Scientist => "For Scientists",
        }
    }
}

impl std::fmt::Display for AudienceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AudienceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family" | "simple" => Ok(AudienceMode::Family),
            "scientist" | "technical" => Ok(AudienceMode::Scientist),
            other => Err(format!("unknown audience mode: {}", other)),
        }
    }
}

/// Family and scientist descriptions for one project.
///
/// Also the provider's JSON response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPair {
    pub family: String,
    pub scientist: String,
}

impl ContentPair {
    pub fn new(family: impl Into<String>, scientist: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            scientist: scientist.into(),
        }
    }

    /// Deterministic fallback: the project brief for both audiences
    pub fn fallback_for(project: &Project) -> Self {
        Self::new(project.brief.clone(), project.brief.clone())
    }

    pub fn for_audience(&self, mode: AudienceMode) -> &str {
        match mode {
            AudienceMode::Family => &self.family,
            AudienceMode::Scientist => &self.scientist,
        }
    }

    /// Both descriptions present
    pub fn is_complete(&self) -> bool {
        !self.family.trim().is_empty() && !self.scientist.trim().is_empty()
    }
}
