use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{Language, QuestionCount, TaskKind},
    services::prompt_builder::build_prompt,
};

/// One submission of the form, built fresh for every press of Generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub task: TaskKind,
    pub language: Language,
    pub question_count: QuestionCount,
    pub source_text: String,
}

impl GenerationRequest {
    pub fn new(
        task: TaskKind,
        language: Language,
        question_count: QuestionCount,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            task,
            language,
            question_count,
            source_text: source_text.into(),
        }
    }

    pub fn prompt(&self) -> String {
        build_prompt(
            self.task,
            &self.source_text,
            self.question_count,
            self.language,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedQuestion {
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsSource {
    /// Four lettered options were read from the model output.
    Parsed,
    /// The output had no usable options; fixed placeholders are shown instead.
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct McqItem {
    pub number: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub options_source: OptionsSource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum GeneratedItems {
    Questions(Vec<GeneratedQuestion>),
    Quiz(Vec<McqItem>),
}

impl GeneratedItems {
    pub fn len(&self) -> usize {
        match self {
            GeneratedItems::Questions(items) => items.len(),
            GeneratedItems::Quiz(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn placeholder_count(&self) -> usize {
        match self {
            GeneratedItems::Questions(_) => 0,
            GeneratedItems::Quiz(items) => items
                .iter()
                .filter(|item| item.options_source == OptionsSource::Placeholder)
                .count(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GenerationOutcome {
    pub request_id: String,
    pub task: TaskKind,
    pub language: Language,
    pub question_count: QuestionCount,
    pub prompt: String,
    pub raw_response: String,
    pub items: GeneratedItems,
    /// Version of the line grammar that produced `items`.
    pub grammar_version: u32,
    pub generated_at: DateTime<Utc>,
}
