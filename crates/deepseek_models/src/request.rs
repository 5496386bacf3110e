//! Validated completion request handed to a driver.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// A single-prompt completion request with generation parameters resolved.
///
/// # Examples
///
/// ```
/// use deepseek_models::{CompletionRequest, DEFAULT_MAX_TOKENS};
///
/// let request = CompletionRequest::builder()
///     .prompt("Explain ownership in Rust")
///     .build()
///     .unwrap();
/// assert_eq!(*request.max_tokens(), DEFAULT_MAX_TOKENS);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// User prompt
    prompt: String,
    /// Maximum tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl CompletionRequest {
    /// Creates a new builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}
