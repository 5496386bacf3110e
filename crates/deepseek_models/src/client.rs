//! HTTP client for the DeepSeek chat completions API.

use crate::{ChatResponse, CompletionDriver, CompletionRequest, DeepSeekConfig, conversions};
use async_trait::async_trait;
use deepseek_error::{DeepSeekError, DeepSeekErrorKind, DeepSeekResult};
use reqwest::Client;
use tracing::{debug, instrument};

/// Client for the DeepSeek chat completions endpoint.
///
/// Holds one long-lived [`reqwest::Client`]; cloning shares its connection pool.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: Client,
    config: DeepSeekConfig,
}

impl DeepSeekClient {
    /// Creates a new client from startup configuration.
    #[instrument(skip(config), fields(model = %config.model(), url = %config.base_url()))]
    pub fn new(config: DeepSeekConfig) -> Self {
        debug!("Created DeepSeek client");
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionDriver for DeepSeekClient {
    #[instrument(skip(self, request), fields(model = %self.config.model(), max_tokens = request.max_tokens(), temperature = request.temperature()))]
    async fn complete(&self, request: &CompletionRequest) -> DeepSeekResult<Option<String>> {
        let chat_request = conversions::to_chat_request(request, &self.config)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                debug!(error = ?e, "HTTP request failed");
                DeepSeekError::new(DeepSeekErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(status = %status, error = %error_text, "API error");

            return Err(DeepSeekError::new(DeepSeekErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            debug!(error = ?e, "Failed to parse response");
            DeepSeekError::new(DeepSeekErrorKind::ResponseParsing(e.to_string()))
        })?;

        if let Some(reasoning) = chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.reasoning_content.as_deref())
        {
            debug!(reasoning_chars = reasoning.chars().count(), "Model produced reasoning");
        }

        debug!(
            choices = chat_response.choices.len(),
            total_tokens = chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Received response"
        );

        Ok(conversions::first_choice_text(&chat_response))
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
