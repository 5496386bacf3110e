//! DeepSeek chat-completion client.
//!
//! Turns a validated [`CompletionRequest`] into one call against an
//! OpenAI-compatible chat completions endpoint and extracts the first
//! choice's text.
//!
//! ```no_run
//! use deepseek_models::{CompletionDriver, CompletionRequest, DeepSeekClient, DeepSeekConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DeepSeekClient::new(DeepSeekConfig::from_env()?);
//! let request = CompletionRequest::builder().prompt("Hello").build()?;
//! let text = client.complete(&request).await?;
//! println!("{}", text.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod conversions;
mod driver;
mod dto;
mod request;

pub use client::DeepSeekClient;
pub use config::{
    API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DeepSeekConfig, MODEL_VAR, SYSTEM_PROMPT_VAR,
};
pub use conversions::{first_choice_text, to_chat_request};
pub use driver::CompletionDriver;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, ChatUsage};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
