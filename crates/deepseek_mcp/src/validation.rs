//! Protocol-level argument checking for `tools/call`.
//!
//! `mcp-server` reports every tool failure as a result with `isError`. Unknown
//! tools and malformed arguments are caller mistakes and get JSON-RPC errors
//! instead (`-32601` and `-32602`), before the router runs anything.

use crate::tools::ToolRegistry;
use crate::{McpError, McpErrorKind};
use mcp_spec::protocol::{ErrorData, JsonRpcRequest, JsonRpcResponse};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower_service::Service;
use tracing::{debug, warn};

const TOOLS_CALL: &str = "tools/call";

/// Service that rejects bad `tools/call` requests before they reach `inner`.
#[derive(Clone, Debug)]
pub struct ValidatingService<S> {
    inner: S,
    tools: ToolRegistry,
}

impl<S> ValidatingService<S> {
    /// Wraps `inner`, validating calls against `tools`.
    pub fn new(inner: S, tools: ToolRegistry) -> Self {
        Self { inner, tools }
    }

    /// Returns the error a `tools/call` request should fail with, if any.
    pub fn check(&self, req: &JsonRpcRequest) -> Option<McpError> {
        if req.method != TOOLS_CALL {
            return None;
        }

        let params = req.params.as_ref();
        let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
            return Some(McpError::new(McpErrorKind::InvalidInput(
                "Tool name must be a string".to_string(),
            )));
        };
        let arguments = params
            .and_then(|p| p.get("arguments"))
            .cloned()
            .unwrap_or(Value::Null);

        self.tools.validate(name, &arguments).err()
    }
}

/// Builds the JSON-RPC error response for a rejected request.
pub fn error_response(id: Option<u64>, err: &McpError) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(ErrorData {
            code: err.kind.code(),
            message: err.kind.to_string(),
            data: None,
        }),
    }
}

impl<S> Service<JsonRpcRequest> for ValidatingService<S>
where
    S: Service<JsonRpcRequest, Response = JsonRpcResponse>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = JsonRpcResponse;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: JsonRpcRequest) -> Self::Future {
        if let Some(err) = self.check(&req) {
            warn!(method = %req.method, code = err.kind.code(), error = %err.kind, "Rejected tool call");
            let response = error_response(req.id, &err);
            return Box::pin(async move { Ok(response) });
        }

        debug!(method = %req.method, "Forwarding request");
        Box::pin(self.inner.call(req))
    }
}
