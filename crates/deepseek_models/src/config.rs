//! Client configuration sourced from the process environment.

use deepseek_error::{ConfigError, ConfigErrorKind, ConfigResult};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "DEEPSEEK_BASE_URL";
/// Environment variable overriding the model identifier.
pub const MODEL_VAR: &str = "DEEPSEEK_MODEL";
/// Environment variable overriding the system instruction.
pub const SYSTEM_PROMPT_VAR: &str = "DEEPSEEK_SYSTEM_PROMPT";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
/// Default model identifier (DeepSeek R1).
pub const DEFAULT_MODEL: &str = "deepseek-reasoner";
/// Default system instruction ("You are a helpful assistant.").
pub const DEFAULT_SYSTEM_PROMPT: &str = "你是一个乐于助人的助手。";

/// Connection settings for the DeepSeek API.
///
/// Built once at startup and handed to [`crate::DeepSeekClient::new`].
/// Request handling never reads the environment.
#[derive(Clone, Getters)]
pub struct DeepSeekConfig {
    /// Bearer credential
    api_key: String,
    /// API base URL, without the `/chat/completions` suffix
    base_url: String,
    /// Model identifier sent with every request
    model: String,
    /// System message prepended to every conversation
    system_prompt: String,
}

impl DeepSeekConfig {
    /// Creates a configuration with default endpoint, model and system prompt.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the system prompt.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEEPSEEK_API_KEY` is unset or empty, or if
    /// `DEEPSEEK_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_VAR).ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::MissingVar(API_KEY_VAR.to_string()))
        })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = var(BASE_URL_VAR) {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::new(ConfigErrorKind::InvalidVar {
                    var: BASE_URL_VAR.to_string(),
                    reason: format!("expected an http(s) URL, got '{}'", base_url),
                }));
            }
            config = config.with_base_url(base_url);
        }
        if let Some(model) = var(MODEL_VAR) {
            config = config.with_model(model);
        }
        if let Some(system_prompt) = var(SYSTEM_PROMPT_VAR) {
            config = config.with_system_prompt(system_prompt);
        }

        debug!(
            base_url = %config.base_url,
            model = %config.model,
            "Loaded DeepSeek configuration"
        );
        Ok(config)
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for DeepSeekConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}
