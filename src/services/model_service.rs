use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends a prompt to a generative model and returns its free-text reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Gemini through its OpenAI-compatible chat endpoint.
///
/// One request per call. There is no retry and no timeout; dropping the
/// returned future cancels the request.
pub struct GeminiModelService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl GeminiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.gemini_api_key.expose_secret())
            .with_api_base(&config.gemini_api_base);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiModelService {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::debug!(
            "Calling model {} with a {} byte prompt",
            self.model_name,
            prompt.len()
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_message)])
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::error!("Model {} request failed: {}", self.model_name, e);
            AppError::from(e)
        })?;

        // A reply without content is treated like a blank reply.
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
