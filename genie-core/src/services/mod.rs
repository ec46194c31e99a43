mod agents;
mod chat;
mod deployment;
mod gas;
mod templates;

pub use agents::{
    AgentDeployer, AgentSettings, DEFAULT_BUDGET, DEFAULT_FREQUENCY, DEFAULT_RISK_LEVEL,
    MONITORED_METRICS,
};
pub use chat::ChatService;
pub use deployment::{
    collect_findings, document_contract, enhance_requirements, require_input,
    select_contract_template, MockDeploymentService,
};
pub use gas::{estimate_gas, rewrite_source, GasOptimizer};
pub use templates::{GENERIC_TEMPLATE, MARKETPLACE_TEMPLATE, NFT_TEMPLATE, TOKEN_TEMPLATE};
