//! Prompt templates for the discovery flow

use crate::core::input::{ProjectQuestion, SearchQuery};
use crate::project::category::Category;
use crate::project::entities::Project;
use serde_json::{Value, json};

/// Templates for each provider call, paired with the JSON schema the
/// response must follow where one applies.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the provider to interpret a donor's query
    pub fn intent_prompt(query: &SearchQuery) -> String {
        format!(
            r#"The user is searching for medical research to fund.
User Input: "{}"

Available Categories: {}.

Please analyze the input and return a JSON object with:
1. 'compassionateResponse': A short, 1-sentence empathetic response acknowledging their situation or goal.
2. 'keywords': An array of strings representing the disease, condition, or scientific approach mentioned (e.g., 'HIE', 'Mitochondrial', 'Down Syndrome').
3. 'categoryFilter': (Optional) One of the available categories if the user specifically requested a type of research."#,
            query.text(),
            Category::prompt_list()
        )
    }

    /// Response schema for [`PromptTemplate::intent_prompt`]
    pub fn intent_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "compassionateResponse": { "type": "STRING" },
                "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
                "categoryFilter": {
                    "type": "STRING",
                    "enum": Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>()
                }
            },
            "required": ["compassionateResponse", "keywords"]
        })
    }

    /// Prompt asking for family and scientist descriptions
    pub fn content_prompt(project: &Project) -> String {
        format!(
            r#"Generate two descriptions for a medical research project titled "{}" by {} at {}.
The project category is {} and the brief is: "{}".

1. "family": A warm, hopeful, and clear explanation for a parent of a sick child. Focus on the 'Why' and the hope it brings. No jargon. (Max 150 words)
2. "scientist": A technical, rigorous description using appropriate medical terminology, referencing hypothetical mechanisms of action relevant to this field. (Max 150 words)

Return JSON."#,
            project.title,
            project.researcher.name,
            project.researcher.institution,
            project.category,
            project.brief
        )
    }

    /// Response schema for [`PromptTemplate::content_prompt`]
    pub fn content_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "family": { "type": "STRING" },
                "scientist": { "type": "STRING" }
            },
            "required": ["family", "scientist"]
        })
    }

    /// Prompt for a free-text answer grounded in one project.
    ///
    /// Single turn: no earlier questions are included.
    pub fn question_prompt(project: &Project, question: &ProjectQuestion) -> String {
        format!(
            r#"You are an empathetic scientific advocate explaining a research project to a potential donor who is not a scientist.

Project: "{}"
Researcher: {} ({})
Context: {}

User Question: "{}"

Answer the question simply, accurately, and with emotional resonance. Explain why this matters NOW. Mention patient impact if relevant. Keep it under 100 words."#,
            project.title,
            project.researcher.name,
            project.researcher.institution,
            project.brief,
            question.content()
        )
    }
}
