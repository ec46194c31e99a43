use tracing::debug;

use crate::models::{AssistantMode, ChatMessage, MessageRole};

/// Transcript state for one assistant conversation.
///
/// Owned by the caller; share it behind a lock when several tasks need it.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    is_loading: bool,
    selected_mode: AssistantMode,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: AssistantMode) -> Self {
        Self {
            selected_mode: mode,
            ..Self::default()
        }
    }

    /// Appends a message with a fresh id and timestamp. Never fails.
    pub fn append_message(&mut self, content: impl Into<String>, role: MessageRole) -> &ChatMessage {
        let message = ChatMessage::new(content, role);
        debug!(id = %message.id, role = %role, "Appending chat message");
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Drops every message. The selected mode is kept.
    pub fn clear_transcript(&mut self) {
        self.messages.clear();
    }

    pub fn set_mode(&mut self, mode: AssistantMode) {
        self.selected_mode = mode;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn selected_mode(&self) -> AssistantMode {
        self.selected_mode
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
