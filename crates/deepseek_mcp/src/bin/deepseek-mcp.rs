//! DeepSeek MCP server binary.

use anyhow::Result;
use deepseek_mcp::{DeepSeekRouter, GenerateTool, Router, ToolRegistry, log_filter, serve};
use deepseek_models::{DeepSeekClient, DeepSeekConfig};
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tokio::sync::Notify;
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries protocol frames, so logs go to stderr
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = DeepSeekConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!("Starting DeepSeek MCP server");

    let client = DeepSeekClient::new(config);
    let mut tools = ToolRegistry::new();
    tools.register(GenerateTool::new(Arc::new(client)));

    let router = DeepSeekRouter::builder()
        .version(env!("CARGO_PKG_VERSION"))
        .tools(tools)
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    let shutdown = Arc::new(Notify::new());
    let shutdown_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown_signal.notify_one(),
            Err(e) => tracing::error!(error = %e, "Failed to install CTRL+C signal handler"),
        }
    });

    tracing::info!("Server ready, listening on stdio");
    serve(router, stdin(), stdout(), shutdown.notified()).await?;

    tracing::info!("DeepSeek MCP server stopped");

    // The blocking stdin reader cannot be cancelled, and dropping the runtime
    // would wait on it.
    std::process::exit(0)
}
