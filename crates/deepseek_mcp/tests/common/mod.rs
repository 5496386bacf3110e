//! Shared helpers for deepseek_mcp integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use deepseek_error::{DeepSeekError, DeepSeekErrorKind, DeepSeekResult};
use deepseek_mcp::{DeepSeekRouter, GenerateTool, ToolRegistry};
use deepseek_models::{CompletionDriver, CompletionRequest};
use std::sync::{Arc, Mutex};

/// What the scripted driver answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Empty,
    Fail(DeepSeekErrorKind),
}

/// In-memory driver that records every request it receives.
#[derive(Debug)]
pub struct ScriptedDriver {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedDriver {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, request: &CompletionRequest) -> DeepSeekResult<Option<String>> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::Empty => Ok(None),
            Reply::Fail(kind) => Err(DeepSeekError::new(kind.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Router with the generate tool wired to `driver`.
pub fn router_with(driver: Arc<ScriptedDriver>) -> DeepSeekRouter {
    let mut tools = ToolRegistry::new();
    tools.register(GenerateTool::new(driver));
    DeepSeekRouter::builder()
        .name("deepseek-r1")
        .version("0.0.0-test")
        .tools(tools)
        .build()
}
