use serde::Serialize;

use crate::models::domain::GenerationOutcome;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type GenerateResponse = ApiResponse<GenerationOutcome>;

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let message = format!("Generated {} item(s)", outcome.items.len());
        ApiResponse {
            data: outcome,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{
        GeneratedItems, GeneratedQuestion, Language, QuestionCount, TaskKind,
    };
    use chrono::Utc;

    #[test]
    fn generate_response_counts_items() {
        let outcome = GenerationOutcome {
            request_id: "req".to_string(),
            task: TaskKind::Questions,
            language: Language::English,
            question_count: QuestionCount::new(2).unwrap(),
            prompt: "p".to_string(),
            raw_response: "a\nb".to_string(),
            items: GeneratedItems::Questions(vec![
                GeneratedQuestion {
                    number: 1,
                    text: "a".to_string(),
                },
                GeneratedQuestion {
                    number: 2,
                    text: "b".to_string(),
                },
            ]),
            grammar_version: 1,
            generated_at: Utc::now(),
        };

        let response = GenerateResponse::from(outcome);
        assert_eq!(response.message, "Generated 2 item(s)");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["question_count"], 2);
        assert_eq!(json["data"]["items"]["kind"], "questions");
        assert_eq!(json["data"]["grammar_version"], 1);
    }
}
