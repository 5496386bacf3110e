//! Runs the router over a byte transport until shutdown.

use crate::validation::ValidatingService;
use crate::{DeepSeekRouter, McpError, McpErrorKind, McpResult};
use mcp_server::router::RouterService;
use mcp_server::{ByteTransport, Router, Server};
use std::future::Future;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{error, info, instrument};

/// Serves MCP requests read from `reader`, writing responses to `writer`.
///
/// Returns when the transport ends or `shutdown` resolves, whichever comes
/// first. The transport is dropped on return, which closes both streams.
///
/// # Errors
///
/// Returns [`McpErrorKind::Transport`] if the transport fails.
#[instrument(skip_all, fields(server = %router.name()))]
pub async fn serve<R, W, F>(router: DeepSeekRouter, reader: R, writer: W, shutdown: F) -> McpResult<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
    F: Future<Output = ()>,
{
    let tools = router.tools().clone();
    info!(tools = tools.len(), version = router.version(), "Serving MCP");

    let server = Server::new(ValidatingService::new(RouterService(router), tools));
    let transport = ByteTransport::new(reader, writer);

    tokio::select! {
        result = server.run(transport) => {
            result.map_err(|e| {
                error!(error = %e, "Transport failed");
                McpError::new(McpErrorKind::Transport(e.to_string()))
            })?;
            info!("Transport closed");
            Ok(())
        }
        _ = shutdown => {
            info!("Shutdown requested, closing transport");
            Ok(())
        }
    }
}
