use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::GenieError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Persona the assistant answers as. Selects the canned response set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantMode {
    #[default]
    Blockchain,
    Security,
    Contracts,
}

impl AssistantMode {
    pub const ALL: [AssistantMode; 3] = [
        AssistantMode::Blockchain,
        AssistantMode::Security,
        AssistantMode::Contracts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssistantMode::Blockchain => "Blockchain",
            AssistantMode::Security => "Security",
            AssistantMode::Contracts => "Contracts",
        }
    }
}

impl std::fmt::Display for AssistantMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistantMode::Blockchain => write!(f, "blockchain"),
            AssistantMode::Security => write!(f, "security"),
            AssistantMode::Contracts => write!(f, "contracts"),
        }
    }
}

impl FromStr for AssistantMode {
    type Err = GenieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blockchain" => Ok(AssistantMode::Blockchain),
            "security" => Ok(AssistantMode::Security),
            "contracts" | "contract" => Ok(AssistantMode::Contracts),
            other => Err(GenieError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, role: MessageRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
