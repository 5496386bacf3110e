//! Error types for MCP server operations.

use derive_more::{Display, Error};
use mcp_spec::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

/// Specific error conditions for MCP server operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum McpErrorKind {
    /// Tool arguments failed validation.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// No tool registered under the requested name.
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),

    /// The stdio transport failed.
    #[display("Transport error: {}", _0)]
    Transport(String),
}

impl McpErrorKind {
    /// JSON-RPC error code reported to the caller.
    pub fn code(&self) -> i32 {
        match self {
            McpErrorKind::InvalidInput(_) => INVALID_PARAMS,
            McpErrorKind::ToolNotFound(_) => METHOD_NOT_FOUND,
            McpErrorKind::Transport(_) => INTERNAL_ERROR,
        }
    }
}

/// MCP server error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("MCP Error: {} at {}:{}", kind, file, line)]
pub struct McpError {
    /// The specific error kind.
    pub kind: McpErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl McpError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: McpErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for MCP server operations.
pub type McpResult<T> = Result<T, McpError>;
