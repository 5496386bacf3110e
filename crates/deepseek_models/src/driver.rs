//! Driver trait for completion backends.

use crate::CompletionRequest;
use async_trait::async_trait;
use deepseek_error::DeepSeekResult;

/// A backend that turns one prompt into one completion.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Requests a completion.
    ///
    /// Returns `Ok(None)` when the backend answered without usable content.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// malformed response body.
    async fn complete(&self, request: &CompletionRequest) -> DeepSeekResult<Option<String>>;

    /// Model identifier this driver targets.
    fn model_name(&self) -> &str;
}
