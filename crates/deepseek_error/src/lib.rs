//! Error types for the DeepSeek MCP server.
//!
//! Every error records the file and line where it was created, so a log line
//! points straight at the failing call site.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod deepseek;

pub use config::{ConfigError, ConfigErrorKind};
pub use deepseek::{DeepSeekError, DeepSeekErrorKind};

/// Result type for DeepSeek API operations.
pub type DeepSeekResult<T> = std::result::Result<T, DeepSeekError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
