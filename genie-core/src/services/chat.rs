use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::latency::{Latency, Operation};
use crate::models::{AssistantMode, ChatMessage, MessageRole};
use crate::responder::{self, QueryContext};
use crate::store::ChatSession;

/// Drives a [`ChatSession`] through the send/reply cycle.
pub struct ChatService {
    session: Arc<RwLock<ChatSession>>,
    latency: Arc<dyn Latency>,
}

impl ChatService {
    pub fn new(session: Arc<RwLock<ChatSession>>, latency: Arc<dyn Latency>) -> Self {
        Self { session, latency }
    }

    pub fn session(&self) -> Arc<RwLock<ChatSession>> {
        Arc::clone(&self.session)
    }

    /// Posts `text` as the user, waits for the simulated reply and posts it.
    ///
    /// The loading flag is held from the user message until the reply lands.
    pub async fn send_message(&self, text: &str) -> ChatMessage {
        let mode = {
            let mut session = self.session.write().await;
            session.append_message(text, MessageRole::User);
            session.set_loading(true);
            session.selected_mode()
        };

        let context = responder::detect_context(text);
        debug!(
            mode = %mode,
            blockchain_context = context == QueryContext::Blockchain,
            persona = responder::persona_prompt(mode),
            "Generating assistant reply"
        );

        self.latency.wait(Operation::ChatReply).await;
        let reply = responder::respond(text, mode);

        let mut session = self.session.write().await;
        let message = session
            .append_message(reply, MessageRole::Assistant)
            .clone();
        session.set_loading(false);
        message
    }

    /// Selects a new persona and starts a clean transcript with its greeting.
    pub async fn switch_mode(&self, mode: AssistantMode) {
        let mut session = self.session.write().await;
        session.set_mode(mode);
        session.clear_transcript();
        session.append_message(responder::welcome_message(mode), MessageRole::Assistant);
        info!(mode = %mode, "Switched assistant mode");
    }

    /// Greets with the current mode's welcome message when the transcript is empty.
    /// Returns whether a message was posted.
    pub async fn ensure_welcome(&self) -> bool {
        let mut session = self.session.write().await;
        if !session.is_empty() {
            return false;
        }
        let mode = session.selected_mode();
        session.append_message(responder::welcome_message(mode), MessageRole::Assistant);
        true
    }

    pub async fn clear(&self) {
        self.session.write().await.clear_transcript();
    }

    pub async fn mode(&self) -> AssistantMode {
        self.session.read().await.selected_mode()
    }

    pub async fn is_loading(&self) -> bool {
        self.session.read().await.is_loading()
    }

    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.session.read().await.messages().to_vec()
    }
}
