use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::LatencyConfig;

/// The simulated operations that carry artificial latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ChatReply,
    DeployAgent,
    GenerateContract,
    ScanContract,
    GenerateDocumentation,
    OptimizeGas,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::ChatReply => write!(f, "chat_reply"),
            Operation::DeployAgent => write!(f, "deploy_agent"),
            Operation::GenerateContract => write!(f, "generate_contract"),
            Operation::ScanContract => write!(f, "scan_contract"),
            Operation::GenerateDocumentation => write!(f, "generate_documentation"),
            Operation::OptimizeGas => write!(f, "optimize_gas"),
        }
    }
}

/// Suspension point taken before every simulated operation completes.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self, op: Operation);
}

/// Completes immediately. Used by tests and `--instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantLatency;

#[async_trait]
impl Latency for InstantLatency {
    async fn wait(&self, _op: Operation) {}
}

/// Sleeps on the tokio timer for the configured per-operation delay.
///
/// Chat replies additionally get a uniform jitter below `chat_jitter_ms`.
pub struct SimulatedLatency {
    config: LatencyConfig,
    rng: Mutex<StdRng>,
}

impl SimulatedLatency {
    pub fn new(config: LatencyConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(config: LatencyConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn base_delay(&self, op: Operation) -> Duration {
        let ms = match op {
            Operation::ChatReply => self.config.chat_base_ms,
            Operation::DeployAgent => self.config.deploy_ms,
            Operation::GenerateContract => self.config.contract_ms,
            Operation::ScanContract => self.config.scan_ms,
            Operation::GenerateDocumentation => self.config.docs_ms,
            Operation::OptimizeGas => self.config.gas_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        let base = self.base_delay(op);
        if op != Operation::ChatReply || self.config.chat_jitter_ms == 0 {
            return base;
        }

        let jitter = match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..self.config.chat_jitter_ms),
            Err(poisoned) => poisoned
                .into_inner()
                .random_range(0..self.config.chat_jitter_ms),
        };
        base + Duration::from_millis(jitter)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self, op: Operation) {
        let delay = self.delay_for(op);
        debug!(operation = %op, delay_ms = delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(delay).await;
    }
}

/// Builds the latency model the configuration asks for.
pub fn from_config(config: &LatencyConfig) -> Arc<dyn Latency> {
    if config.enabled {
        Arc::new(SimulatedLatency::new(config.clone()))
    } else {
        Arc::new(InstantLatency)
    }
}
