//! DeepSeek API error types.

use derive_more::{Display, Error};

/// DeepSeek API error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum DeepSeekErrorKind {
    /// Network or transport failure before a response arrived
    #[display("Request failed: {}", _0)]
    Http(String),

    /// API answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Request could not be assembled
    #[display("Failed to build request: {}", _0)]
    Builder(String),
}

/// DeepSeek error with source location tracking.
///
/// # Examples
///
/// ```
/// use deepseek_error::{DeepSeekError, DeepSeekErrorKind};
///
/// let err = DeepSeekError::new(DeepSeekErrorKind::Api {
///     status: 401,
///     message: "invalid api key".to_string(),
/// });
/// assert_eq!(err.detail(), "API error (status 401): invalid api key");
/// assert!(err.to_string().contains("at line"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("DeepSeek Error: {} at line {} in {}", kind, line, file)]
pub struct DeepSeekError {
    /// The kind of error that occurred
    pub kind: DeepSeekErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeepSeekError {
    /// Create a new DeepSeekError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeepSeekErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human-readable description without the source location.
    pub fn detail(&self) -> String {
        self.kind.to_string()
    }
}
