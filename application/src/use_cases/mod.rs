//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod extract_intent;
pub mod operation_state;
pub mod project_detail;
pub mod search_projects;
pub mod selection;
pub mod shared;
pub mod synthesize_content;

#[cfg(test)]
pub(crate) mod test_support;
