//! MCP router exposing the registered tools.

use crate::tools::ToolRegistry;
use crate::McpErrorKind;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    prompt::Prompt,
    protocol::ServerCapabilities,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, instrument, warn};

/// Default advertised server name.
pub const SERVER_NAME: &str = "deepseek-r1";

/// MCP router for the DeepSeek server implementing the Router trait.
#[derive(Clone, Debug)]
pub struct DeepSeekRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl DeepSeekRouter {
    /// Creates a new router builder.
    pub fn builder() -> DeepSeekRouterBuilder {
        DeepSeekRouterBuilder::default()
    }

    /// Advertised server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Registered tools.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

impl Router for DeepSeekRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "DeepSeek MCP Server v{}\n\n\
            This server forwards prompts to the DeepSeek R1 reasoning model and returns the generated text.\n\n\
            Available tools: {}",
            self.version,
            self.tools
                .list()
                .iter()
                .map(|t| t.name().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(response) if response.is_error => {
                    Err(ToolError::ExecutionError(response.text))
                }
                Ok(response) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    Ok(vec![Content::text(response.text)])
                }
                Err(e) => {
                    warn!(tool = %tool_name, error = %e, "Tool call rejected");
                    Err(match e.kind {
                        McpErrorKind::ToolNotFound(name) => ToolError::NotFound(name),
                        McpErrorKind::InvalidInput(msg) => ToolError::InvalidParameters(msg),
                        other => ToolError::ExecutionError(other.to_string()),
                    })
                }
            }
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        vec![]
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move {
            Err(ResourceError::NotFound(format!(
                "Resource {} not found - this server has no resources",
                uri
            )))
        })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt {} not found - this server has no prompts",
                prompt_name
            )))
        })
    }
}

/// Builder for the DeepSeek MCP router.
#[derive(Default)]
pub struct DeepSeekRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl DeepSeekRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the router.
    pub fn build(self) -> DeepSeekRouter {
        DeepSeekRouter {
            name: self.name.unwrap_or_else(|| SERVER_NAME.to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools.unwrap_or_default(),
        }
    }
}
