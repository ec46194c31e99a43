use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::GenieError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Trading,
    Monitoring,
    Custom,
}

impl AgentType {
    pub const ALL: [AgentType; 3] = [AgentType::Trading, AgentType::Monitoring, AgentType::Custom];

    /// Capitalized name used in default agent names and log output.
    pub fn title(&self) -> &'static str {
        match self {
            AgentType::Trading => "Trading",
            AgentType::Monitoring => "Monitoring",
            AgentType::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentType::Trading => write!(f, "trading"),
            AgentType::Monitoring => write!(f, "monitoring"),
            AgentType::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for AgentType {
    type Err = GenieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trading" => Ok(AgentType::Trading),
            "monitoring" => Ok(AgentType::Monitoring),
            "custom" => Ok(AgentType::Custom),
            other => Err(GenieError::InvalidAgentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Active,
    Paused,
    Error,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentStatus::Active => write!(f, "active"),
            AgentStatus::Paused => write!(f, "paused"),
            AgentStatus::Error => write!(f, "error"),
        }
    }
}

impl FromStr for AgentStatus {
    type Err = GenieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AgentStatus::Active),
            "paused" => Ok(AgentStatus::Paused),
            "error" => Ok(AgentStatus::Error),
            other => Err(GenieError::InvalidAgentStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub status: AgentStatus,
    pub configuration: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub last_active: Option<DateTime<Utc>>,
}

impl AgentRecord {
    pub fn new(name: impl Into<String>, agent_type: AgentType, configuration: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            agent_type,
            status: AgentStatus::Active,
            configuration,
            created_at: Utc::now(),
            last_active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    pub fn set_status(&mut self, status: AgentStatus) {
        self.status = status;
        self.last_active = Some(Utc::now());
    }
}
