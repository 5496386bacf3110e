//! MCP tools and the registry that dispatches to them.

mod generate;

pub use generate::{GenerateArgs, GenerateTool, API_ERROR_PREFIX, NO_RESPONSE, TOOL_NAME};

use crate::{McpError, McpErrorKind, McpResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Outcome of a tool invocation.
///
/// `is_error` marks a failure the tool handled itself; the caller still gets
/// `text` to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    /// Generated text, sentinel, or error description
    pub text: String,
    /// Whether `text` describes a failure
    pub is_error: bool,
}

impl ToolResponse {
    /// Successful response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Failed response carrying a human-readable message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// A callable tool advertised over MCP.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name.
    fn name(&self) -> &str;

    /// Human-readable description shown to clients.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Checks arguments without running the tool.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::InvalidInput`] when the arguments do not match
    /// the schema.
    fn validate(&self, input: &Value) -> McpResult<()>;

    /// Runs the tool.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::InvalidInput`] for bad arguments. Downstream
    /// failures are reported through [`ToolResponse::is_error`] instead.
    async fn execute(&self, input: Value) -> McpResult<ToolResponse>;
}

/// Registry of available tools, keyed by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        debug!(tool = tool.name(), "Registering tool");
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// All tools, ordered by name.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.values().cloned().collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn lookup(&self, name: &str) -> McpResult<Arc<dyn McpTool>> {
        self.get(name)
            .ok_or_else(|| McpError::new(McpErrorKind::ToolNotFound(name.to_string())))
    }

    /// Checks that `name` exists and `input` matches its schema.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::ToolNotFound`] or [`McpErrorKind::InvalidInput`].
    pub fn validate(&self, name: &str, input: &Value) -> McpResult<()> {
        self.lookup(name)?.validate(input)
    }

    /// Executes the named tool.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::ToolNotFound`] or whatever the tool returns.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<ToolResponse> {
        self.lookup(name)?.execute(input).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}
