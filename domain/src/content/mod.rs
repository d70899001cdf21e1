//! Per-project content: audience descriptions and Q&A

pub mod pair;
pub mod qa;
