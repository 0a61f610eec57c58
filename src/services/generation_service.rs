use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{GenerationOutcome, GenerationRequest},
    services::{
        model_service::TextGenerator,
        response_parser::{parser_for, GRAMMAR_VERSION},
    },
};

/// Runs one submission end to end: prompt, model call, parse.
pub struct GenerationService {
    model: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        request_id: &str,
        request: &GenerationRequest,
    ) -> AppResult<GenerationOutcome> {
        let prompt = request.prompt();
        log::info!(
            "[{}] Generating {} x{} in {} ({} byte prompt)",
            request_id,
            request.task,
            request.question_count,
            request.language,
            prompt.len()
        );

        let raw_response = self.model.generate(&prompt).await?;

        if raw_response.trim().is_empty() {
            log::warn!("[{}] Model returned a blank response", request_id);
            return Err(AppError::EmptyResponse(
                request.task.empty_response_message().to_string(),
            ));
        }

        let items = parser_for(request.task).parse(&raw_response);
        log::info!(
            "[{}] Parsed {} item(s) from a {} byte response",
            request_id,
            items.len(),
            raw_response.len()
        );

        let placeholders = items.placeholder_count();
        if placeholders > 0 {
            log::warn!(
                "[{}] {} quiz item(s) had no parseable options; showing placeholders",
                request_id,
                placeholders
            );
        }

        Ok(GenerationOutcome {
            request_id: request_id.to_string(),
            task: request.task,
            language: request.language,
            question_count: request.question_count,
            prompt,
            raw_response,
            items,
            grammar_version: GRAMMAR_VERSION,
            generated_at: Utc::now(),
        })
    }
}
