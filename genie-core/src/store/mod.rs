mod agents;
mod chat;

pub use agents::AgentRegistry;
pub use chat::ChatSession;
