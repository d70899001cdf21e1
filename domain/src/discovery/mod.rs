//! Search: intent, local fallback heuristic and relevance filtering

pub mod heuristic;
pub mod intent;
pub mod relevance;

/// Quick filters offered before the donor types anything
pub const SUGGESTED_QUERIES: [&str; 5] = [
    "Pediatric Neurology",
    "Gene Therapy",
    "Clinical Trials",
    "Stanford",
    "Rare Disease",
];
