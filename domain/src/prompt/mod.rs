//! Prompt templates and response schemas

mod template;

pub use template::PromptTemplate;
