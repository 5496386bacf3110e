//! DeepSeek R1 text generation tool.

use crate::tools::{McpTool, ToolResponse};
use crate::{McpError, McpErrorKind, McpResult};
use async_trait::async_trait;
use deepseek_models::{
    CompletionDriver, CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Name the tool is advertised under.
pub const TOOL_NAME: &str = "deepseek_r1";

/// Text returned when the model answers without content.
pub const NO_RESPONSE: &str = "No response";

/// Prefix of the message returned when the API call fails.
pub const API_ERROR_PREFIX: &str = "Error calling DeepSeek API: ";

const MAX_TOKENS_RANGE: std::ops::RangeInclusive<u32> = 1..=8192;
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

// Widening f32 to f64 directly would advertise 0.2 as 0.20000000298023224.
fn schema_number(value: f32) -> Value {
    value.to_string().parse::<f64>().map_or(Value::Null, Value::from)
}

/// Arguments accepted by the `deepseek_r1` tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateArgs {
    /// Prompt sent as the user message
    pub prompt: String,
    /// Maximum tokens to generate
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl GenerateArgs {
    /// Parses and bounds-checks raw tool arguments.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::InvalidInput`] if `prompt` is missing, not a
    /// string or empty, or if an optional field has the wrong type or falls
    /// outside its range.
    pub fn parse(input: &Value) -> McpResult<Self> {
        let args = GenerateArgs::deserialize(input)
            .map_err(|e| McpError::new(McpErrorKind::InvalidInput(e.to_string())))?;

        if args.prompt.is_empty() {
            return Err(McpError::new(McpErrorKind::InvalidInput(
                "'prompt' must not be empty".to_string(),
            )));
        }

        if let Some(max_tokens) = args
            .max_tokens
            .filter(|max_tokens| !MAX_TOKENS_RANGE.contains(max_tokens))
        {
            return Err(McpError::new(McpErrorKind::InvalidInput(format!(
                "'max_tokens' must be between {} and {}, got {}",
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end(),
                max_tokens
            ))));
        }

        if let Some(temperature) = args
            .temperature
            .filter(|temperature| !TEMPERATURE_RANGE.contains(temperature))
        {
            return Err(McpError::new(McpErrorKind::InvalidInput(format!(
                "'temperature' must be between {} and {}, got {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end(),
                temperature
            ))));
        }

        Ok(args)
    }

    /// Resolves defaults into a completion request.
    ///
    /// # Errors
    ///
    /// Returns [`McpErrorKind::InvalidInput`] if the request cannot be built.
    pub fn into_request(self) -> McpResult<CompletionRequest> {
        CompletionRequest::builder()
            .prompt(self.prompt)
            .max_tokens(self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .build()
            .map_err(|e| McpError::new(McpErrorKind::InvalidInput(e.to_string())))
    }
}

/// Tool that forwards a prompt to DeepSeek R1.
pub struct GenerateTool {
    driver: Arc<dyn CompletionDriver>,
}

impl GenerateTool {
    /// Creates the tool over a completion driver.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl McpTool for GenerateTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Generate text using DeepSeek R1 model"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "Input text for DeepSeek"
                },
                "max_tokens": {
                    "type": "integer",
                    "description": "Maximum tokens to generate",
                    "minimum": MAX_TOKENS_RANGE.start(),
                    "maximum": MAX_TOKENS_RANGE.end(),
                    "default": DEFAULT_MAX_TOKENS
                },
                "temperature": {
                    "type": "number",
                    "description": "Sampling temperature (0.0-2.0)",
                    "minimum": schema_number(*TEMPERATURE_RANGE.start()),
                    "maximum": schema_number(*TEMPERATURE_RANGE.end()),
                    "default": schema_number(DEFAULT_TEMPERATURE)
                }
            },
            "required": ["prompt"]
        })
    }

    fn validate(&self, input: &Value) -> McpResult<()> {
        GenerateArgs::parse(input).map(|_| ())
    }

    #[instrument(skip(self, input), fields(model = self.driver.model_name()))]
    async fn execute(&self, input: Value) -> McpResult<ToolResponse> {
        let request = GenerateArgs::parse(&input)?.into_request()?;

        debug!(
            prompt_chars = request.prompt().chars().count(),
            max_tokens = request.max_tokens(),
            temperature = request.temperature(),
            "Requesting completion"
        );

        match self.driver.complete(&request).await {
            Ok(Some(text)) => {
                info!(chars = text.chars().count(), "Completion received");
                Ok(ToolResponse::text(text))
            }
            Ok(None) => {
                info!("Completion had no content");
                Ok(ToolResponse::text(NO_RESPONSE))
            }
            Err(e) => {
                error!(error = %e, "DeepSeek API call failed");
                Ok(ToolResponse::error(format!("{}{}", API_ERROR_PREFIX, e.detail())))
            }
        }
    }
}
