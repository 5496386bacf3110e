//! Conversions between completion requests and the chat wire format.

use crate::{ChatMessage, ChatRequest, ChatResponse, CompletionRequest, DeepSeekConfig};
use deepseek_error::{DeepSeekError, DeepSeekErrorKind, DeepSeekResult};

/// Builds the two-message chat request for a completion.
pub fn to_chat_request(
    req: &CompletionRequest,
    config: &DeepSeekConfig,
) -> DeepSeekResult<ChatRequest> {
    let messages = vec![
        ChatMessage::system(config.system_prompt().as_str()),
        ChatMessage::user(req.prompt().as_str()),
    ];

    ChatRequest::builder()
        .model(config.model().as_str())
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .build()
        .map_err(|e| DeepSeekError::new(DeepSeekErrorKind::Builder(e.to_string())))
}

/// Extracts the first choice's text.
///
/// Returns `None` when there are no choices or the content is null or empty.
pub fn first_choice_text(response: &ChatResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .filter(|content| !content.is_empty())
}
