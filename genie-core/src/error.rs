//! Error types for the Genie core library.
//!
//! The simulated services never fail for well-formed input, so most of the
//! taxonomy covers the edges: configuration loading, caller-side validation,
//! agent lookups and the I/O performed by the CLI.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E2001-E2099 | Config | Environment, config file, and validation errors |
//! | E3001-E3099 | Agent | Agent lookup and agent type errors |
//! | E4001-E4099 | Chat | Assistant mode and transcript errors |
//! | E9001-E9099 | General | IO and validation errors |

use thiserror::Error;

/// The main error type for the Genie core library.
#[derive(Debug, Error)]
pub enum GenieError {
    // ========================================================================
    // Configuration Errors (E2001-E2099)
    // ========================================================================
    /// Configuration file parse error
    #[error("[E2001] Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// Invalid configuration value
    #[error("[E2002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // Agent Errors (E3001-E3099)
    // ========================================================================
    /// No agent with the given id is registered
    #[error("[E3001] Agent not found: {0}")]
    AgentNotFound(String),

    /// Unknown agent type name
    #[error("[E3002] Invalid agent type: {0}")]
    InvalidAgentType(String),

    /// Unknown agent status name
    #[error("[E3003] Invalid agent status: {0}")]
    InvalidAgentStatus(String),

    // ========================================================================
    // Chat Errors (E4001-E4099)
    // ========================================================================
    /// Unknown assistant mode name
    #[error("[E4001] Invalid assistant mode: {0}")]
    InvalidMode(String),

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// Input rejected before reaching a simulated service
    #[error("[E9004] Validation error: {0}")]
    ValidationError(String),

    /// IO error
    #[error("[E9005] IO error: {0}")]
    IoError(String),
}

/// Result type alias for Genie operations.
pub type GenieResult<T> = Result<T, GenieError>;

impl From<std::io::Error> for GenieError {
    fn from(err: std::io::Error) -> Self {
        GenieError::IoError(err.to_string())
    }
}

impl From<config::ConfigError> for GenieError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => GenieError::InvalidConfigValue {
                key,
                message: "Key not found".to_string(),
            },
            config::ConfigError::FileParse { uri, cause } => GenieError::ConfigParseError(
                format!("Failed to parse {}: {}", uri.unwrap_or_default(), cause),
            ),
            config::ConfigError::Type {
                origin,
                unexpected,
                expected,
                key,
            } => GenieError::InvalidConfigValue {
                key: key.unwrap_or_else(|| origin.map(|o| o.to_string()).unwrap_or_default()),
                message: format!("Expected {}, got {}", expected, unexpected),
            },
            _ => GenieError::ConfigParseError(err.to_string()),
        }
    }
}

impl From<crate::config::ConfigLoadError> for GenieError {
    fn from(err: crate::config::ConfigLoadError) -> Self {
        match err {
            crate::config::ConfigLoadError::Config(e) => e.into(),
            crate::config::ConfigLoadError::InvalidValue { key, message } => {
                GenieError::InvalidConfigValue { key, message }
            }
            crate::config::ConfigLoadError::Io(e) => e.into(),
        }
    }
}

impl GenieError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        GenieError::ValidationError(message.into())
    }

    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GenieError::ConfigParseError(_) | GenieError::InvalidConfigValue { .. }
        )
    }

    /// Returns true if this error is related to agent operations.
    pub fn is_agent_error(&self) -> bool {
        matches!(
            self,
            GenieError::AgentNotFound(_)
                | GenieError::InvalidAgentType(_)
                | GenieError::InvalidAgentStatus(_)
        )
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            GenieError::ConfigParseError(_) => "E2001",
            GenieError::InvalidConfigValue { .. } => "E2002",
            GenieError::AgentNotFound(_) => "E3001",
            GenieError::InvalidAgentType(_) => "E3002",
            GenieError::InvalidAgentStatus(_) => "E3003",
            GenieError::InvalidMode(_) => "E4001",
            GenieError::ValidationError(_) => "E9004",
            GenieError::IoError(_) => "E9005",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            GenieError::ConfigParseError(_) => {
                Some("Check genie.toml or run 'genie config show' to see the effective values")
            }
            GenieError::InvalidConfigValue { .. } => {
                Some("Fix the value in genie.toml or the matching GENIE_* environment variable")
            }
            GenieError::AgentNotFound(_) => Some("Run 'list' to see the ids of deployed agents"),
            GenieError::InvalidAgentType(_) => {
                Some("Valid agent types are: trading, monitoring, custom")
            }
            GenieError::InvalidAgentStatus(_) => {
                Some("Valid agent statuses are: active, paused, error")
            }
            GenieError::InvalidMode(_) => {
                Some("Valid assistant modes are: blockchain, security, contracts")
            }
            _ => None,
        }
    }
}
