use tracing::debug;
use uuid::Uuid;

use crate::models::{AgentRecord, AgentStatus};

/// Ordered set of deployed agents plus the deploy-in-progress flag.
///
/// Id uniqueness is the caller's contract. Lookups use the first match.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: Vec<AgentRecord>,
    is_deploying: bool,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_agent(&mut self, agent: AgentRecord) {
        debug!(id = %agent.id, name = %agent.name, "Adding agent to registry");
        self.agents.push(agent);
    }

    /// Removes the first agent with `id`. Returns false when nothing matched.
    pub fn remove_agent(&mut self, id: Uuid) -> bool {
        match self.agents.iter().position(|a| a.id == id) {
            Some(index) => {
                self.agents.remove(index);
                debug!(id = %id, "Removed agent from registry");
                true
            }
            None => false,
        }
    }

    /// Sets the status of the first agent with `id` and stamps `last_active`.
    /// Returns false when nothing matched.
    pub fn update_status(&mut self, id: Uuid, status: AgentStatus) -> bool {
        match self.agents.iter_mut().find(|a| a.id == id) {
            Some(agent) => {
                agent.set_status(status);
                debug!(id = %id, status = %status, "Updated agent status");
                true
            }
            None => false,
        }
    }

    pub fn set_deploying(&mut self, deploying: bool) {
        self.is_deploying = deploying;
    }

    pub fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }

    pub fn get(&self, id: Uuid) -> Option<&AgentRecord> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn is_deploying(&self) -> bool {
        self.is_deploying
    }

    pub fn count_by_status(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
