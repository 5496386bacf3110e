//! Startup configuration error types.

use derive_more::{Display, Error};

/// Ways the server environment can be unusable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ConfigErrorKind {
    /// A required variable is unset or blank
    #[display("{} environment variable not set", _0)]
    MissingVar(String),

    /// A variable is set to a value the server cannot use
    #[display("{} is invalid: {}", var, reason)]
    InvalidVar {
        /// Variable name
        var: String,
        /// Why the value was refused
        reason: String,
    },
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use deepseek_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingVar("DEEPSEEK_API_KEY".into()));
/// assert_eq!(err.detail(), "DEEPSEEK_API_KEY environment variable not set");
/// assert!(err.to_string().starts_with("Configuration Error: DEEPSEEK_API_KEY"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What is wrong with the environment
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name of the offending environment variable.
    pub fn var(&self) -> &str {
        match &self.kind {
            ConfigErrorKind::MissingVar(var) => var,
            ConfigErrorKind::InvalidVar { var, .. } => var,
        }
    }

    /// Human-readable description without the source location.
    pub fn detail(&self) -> String {
        self.kind.to_string()
    }
}
