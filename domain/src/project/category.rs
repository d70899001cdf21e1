//! Research category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Research category (Value Object)
///
/// A small closed set. Provider output naming anything else is treated as
/// "no category" rather than an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GeneTherapy,
    DrugRepurposing,
    BasicScience,
    ClinicalTrial,
    DiseaseModeling,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::GeneTherapy,
        Category::DrugRepurposing,
        Category::BasicScience,
        Category::ClinicalTrial,
        Category::DiseaseModeling,
    ];

    /// Display name, also used on the wire and in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GeneTherapy => "Gene Therapy",
            Category::DrugRepurposing => "Drug Repurposing",
            Category::BasicScience => "Basic Science",
            Category::ClinicalTrial => "Clinical Trial",
            Category::DiseaseModeling => "Disease Modeling",
        }
    }

    /// Coerce loosely formatted text into the closed set.
    ///
    /// Accepts display names and identifiers in any case, ignoring spaces,
    /// dashes and underscores. Returns `None` for anything else.
    pub fn coerce(raw: &str) -> Option<Category> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Category::ALL.into_iter().find(|category| {
            let candidate: String = category
                .as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect();
            candidate == normalized
        })
    }

    /// Comma-separated quoted list for prompts
    pub fn prompt_list() -> String {
        Category::ALL
            .iter()
            .map(|c| format!("'{}'", c.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::coerce(s).ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
