use std::sync::Arc;

use serde_json::{json, Map, Value};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{GenieError, GenieResult};
use crate::models::{AgentRecord, AgentStatus, AgentType};
use crate::store::AgentRegistry;

use super::deployment::MockDeploymentService;

pub const DEFAULT_BUDGET: &str = "0.1 ETH";
pub const DEFAULT_FREQUENCY: &str = "hourly";
pub const DEFAULT_RISK_LEVEL: u8 = 50;
pub const MONITORED_METRICS: [&str; 3] = ["gas", "price", "volume"];

/// Form-level input for a new agent, turned into its configuration object.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub name: String,
    pub agent_type: AgentType,
    pub risk_level: u8,
    pub budget: Option<String>,
    pub frequency: Option<String>,
    pub description: Option<String>,
}

impl AgentSettings {
    pub fn new(name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            name: name.into(),
            agent_type,
            risk_level: DEFAULT_RISK_LEVEL,
            budget: None,
            frequency: None,
            description: None,
        }
    }

    /// Clamped to 0..=100.
    pub fn with_risk_level(mut self, risk_level: u8) -> Self {
        self.risk_level = risk_level.min(100);
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn strategy(&self) -> &'static str {
        match self.risk_level {
            r if r < 30 => "conservative",
            r if r > 70 => "aggressive",
            _ => "balanced",
        }
    }

    pub fn automation_level(&self) -> u8 {
        self.risk_level / 20
    }

    /// The free-form configuration stored on the agent record.
    ///
    /// Keys use camelCase to match what the agent dashboards read.
    pub fn configuration(&self) -> Value {
        let mut config = Map::new();
        config.insert("name".to_string(), json!(self.name));

        match self.agent_type {
            AgentType::Trading => {
                let budget = self
                    .budget
                    .as_deref()
                    .filter(|b| !b.trim().is_empty())
                    .unwrap_or(DEFAULT_BUDGET);
                config.insert("riskLevel".to_string(), json!(self.risk_level));
                config.insert("budget".to_string(), json!(budget));
                config.insert("strategy".to_string(), json!(self.strategy()));
            }
            AgentType::Monitoring => {
                let frequency = self
                    .frequency
                    .as_deref()
                    .filter(|f| !f.trim().is_empty())
                    .unwrap_or(DEFAULT_FREQUENCY);
                config.insert("frequency".to_string(), json!(frequency));
                config.insert("alertThreshold".to_string(), json!(self.risk_level));
                config.insert("metrics".to_string(), json!(MONITORED_METRICS));
            }
            AgentType::Custom => {
                config.insert(
                    "customParameters".to_string(),
                    json!({
                        "complexity": self.risk_level,
                        "automationLevel": self.automation_level(),
                    }),
                );
            }
        }

        if let Some(description) = &self.description {
            config.insert("description".to_string(), json!(description));
        }

        Value::Object(config)
    }
}

/// Deploy, pause, resume and remove flow over a shared registry.
pub struct AgentDeployer {
    registry: Arc<RwLock<AgentRegistry>>,
    service: MockDeploymentService,
}

impl AgentDeployer {
    pub fn new(registry: Arc<RwLock<AgentRegistry>>, service: MockDeploymentService) -> Self {
        Self { registry, service }
    }

    pub fn registry(&self) -> Arc<RwLock<AgentRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Rejects blank names, then deploys and registers the agent.
    ///
    /// The registry's deploying flag is raised for the duration of the call.
    pub async fn deploy(&self, settings: AgentSettings) -> GenieResult<AgentRecord> {
        let name = settings.name.trim();
        if name.is_empty() {
            return Err(GenieError::validation("Please provide a name for your agent"));
        }
        let name = name.to_string();

        self.registry.write().await.set_deploying(true);

        let mut agent = self
            .service
            .deploy_agent(settings.agent_type, settings.configuration())
            .await;
        agent.name = name;

        let mut registry = self.registry.write().await;
        registry.add_agent(agent.clone());
        registry.set_deploying(false);

        info!(agent_id = %agent.id, "Agent \"{}\" deployed successfully", agent.name);
        Ok(agent)
    }

    pub async fn pause(&self, id: Uuid) -> GenieResult<AgentRecord> {
        self.set_status(id, AgentStatus::Paused).await
    }

    pub async fn resume(&self, id: Uuid) -> GenieResult<AgentRecord> {
        self.set_status(id, AgentStatus::Active).await
    }

    /// Active agents are paused; paused or failed agents are resumed.
    pub async fn toggle(&self, id: Uuid) -> GenieResult<AgentRecord> {
        let current = self
            .registry
            .read()
            .await
            .get(id)
            .map(|a| a.status)
            .ok_or_else(|| GenieError::AgentNotFound(id.to_string()))?;

        let next = if current == AgentStatus::Active {
            AgentStatus::Paused
        } else {
            AgentStatus::Active
        };
        self.set_status(id, next).await
    }

    pub async fn remove(&self, id: Uuid) -> GenieResult<()> {
        if self.registry.write().await.remove_agent(id) {
            info!(agent_id = %id, "Agent removed successfully");
            Ok(())
        } else {
            warn!(agent_id = %id, "Attempted to remove unknown agent");
            Err(GenieError::AgentNotFound(id.to_string()))
        }
    }

    pub async fn list(&self) -> Vec<AgentRecord> {
        self.registry.read().await.agents().to_vec()
    }

    async fn set_status(&self, id: Uuid, status: AgentStatus) -> GenieResult<AgentRecord> {
        let mut registry = self.registry.write().await;
        if !registry.update_status(id, status) {
            return Err(GenieError::AgentNotFound(id.to_string()));
        }

        let verb = if status == AgentStatus::Active {
            "resumed"
        } else {
            "paused"
        };
        info!(agent_id = %id, "Agent {} successfully", verb);

        registry
            .get(id)
            .cloned()
            .ok_or_else(|| GenieError::AgentNotFound(id.to_string()))
    }
}
