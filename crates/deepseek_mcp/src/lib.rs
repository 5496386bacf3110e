//! Model Context Protocol (MCP) server for DeepSeek R1.
//!
//! This crate exposes a single tool, `deepseek_r1`, that forwards a prompt to
//! the DeepSeek chat completions API and returns the generated text.
//!
//! # Usage
//!
//! ```no_run
//! use deepseek_mcp::{DeepSeekRouter, GenerateTool, ToolRegistry, serve};
//! use deepseek_models::{DeepSeekClient, DeepSeekConfig};
//! use std::sync::Arc;
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DeepSeekClient::new(DeepSeekConfig::from_env()?);
//!
//!     let mut tools = ToolRegistry::new();
//!     tools.register(GenerateTool::new(Arc::new(client)));
//!
//!     let router = DeepSeekRouter::builder().tools(tools).build();
//!     serve(router, stdin(), stdout(), async {
//!         tokio::signal::ctrl_c().await.ok();
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod logging;
mod serve;
mod server;
pub mod tools;
mod validation;

pub use error::{McpError, McpErrorKind, McpResult};
pub use logging::{DEFAULT_LOG_FILTER, log_filter};
pub use serve::serve;
pub use server::{DeepSeekRouter, DeepSeekRouterBuilder, SERVER_NAME};
pub use tools::{GenerateArgs, GenerateTool, McpTool, ToolRegistry, ToolResponse};
pub use validation::{ValidatingService, error_response};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
