mod agent;
mod chat;
mod contract;

pub use agent::{AgentRecord, AgentStatus, AgentType};
pub use chat::{AssistantMode, ChatMessage, MessageRole};
pub use contract::{
    ContractDocumentation, ContractKind, EventDoc, FunctionDoc, GasOptimization,
    GeneratedContract, RiskLevel, ScanFinding, ScanReport, Severity,
};
