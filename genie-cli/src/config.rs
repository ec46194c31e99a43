use std::sync::Arc;

use anyhow::Result;
use genie_core::{latency, GenieConfig, GenieError, Latency, MockDeploymentService};

/// Effective configuration plus the latency model shared by every command.
#[derive(Clone)]
pub struct CliContext {
    pub config: GenieConfig,
    pub latency: Arc<dyn Latency>,
}

impl CliContext {
    pub fn load(instant: bool) -> Result<Self> {
        let config = GenieConfig::load().map_err(GenieError::from)?;
        Ok(Self::from_config(config, instant))
    }

    pub fn from_config(config: GenieConfig, instant: bool) -> Self {
        let config = if instant { config.instant() } else { config };
        let latency = latency::from_config(&config.latency);
        Self { config, latency }
    }

    pub fn deployment_service(&self) -> MockDeploymentService {
        MockDeploymentService::new(Arc::clone(&self.latency))
    }
}
