//! Simulation core for the Web3 AI Labs suite: the assistant transcript,
//! the agent registry, canned assistant replies and the mock contract tooling.
//!
//! Nothing here talks to a model or a chain. Every "AI" answer comes from an
//! ordered keyword table and every service call is an artificial delay
//! followed by template selection.

pub mod config;
pub mod error;
pub mod latency;
pub mod models;
pub mod responder;
pub mod services;
pub mod store;

pub use config::{
    get_config_dir, ChatConfig, ConfigLoadError, GenieConfig, LatencyConfig, LoggingConfig,
};
pub use error::{GenieError, GenieResult};
pub use latency::{InstantLatency, Latency, Operation, SimulatedLatency};
pub use models::{
    AgentRecord, AgentStatus, AgentType, AssistantMode, ChatMessage, ContractDocumentation,
    ContractKind, EventDoc, FunctionDoc, GasOptimization, GeneratedContract, MessageRole,
    RiskLevel, ScanFinding, ScanReport, Severity,
};
pub use responder::{
    detect_context, persona_prompt, respond, welcome_message, QueryContext, ResponseRule,
};
pub use services::{
    enhance_requirements, require_input, AgentDeployer, AgentSettings, ChatService,
    GasOptimizer, MockDeploymentService,
};
pub use store::{AgentRegistry, ChatSession};
