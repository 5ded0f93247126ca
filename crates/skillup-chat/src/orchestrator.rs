//! Chat orchestrator: guards incoming messages, routes them, keeps history.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Local;
use skillup_core::config::AssistantConfig;
use tracing::debug;
use uuid::Uuid;

use crate::error::ChatError;
use crate::router::{Classifier, IntentRouter};
use crate::types::{ChatMessage, Response, Role};

/// Front door of the assistant.
///
/// Blank messages are rejected here and never reach the classifier.
pub struct ChatOrchestrator<C = IntentRouter> {
    classifier: C,
    config: AssistantConfig,
    history: Mutex<VecDeque<ChatMessage>>,
}

impl<C: Classifier> ChatOrchestrator<C> {
    pub fn new(classifier: C, config: AssistantConfig) -> Self {
        Self {
            classifier,
            config,
            history: Mutex::new(VecDeque::new()),
        }
    }

    /// Handle an incoming chat message.
    pub fn handle_message(
        &self,
        message: &str,
        is_authenticated: bool,
    ) -> Result<Response, ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }

        let text = message.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.chars().count() > self.config.max_message_chars {
            return Err(ChatError::MessageTooLong(self.config.max_message_chars));
        }

        let response = self.classifier.classify(text, is_authenticated);
        debug!(kind = ?response.kind, "Chat message answered");

        self.record_exchange(text, &response)?;

        Ok(response)
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Result<Vec<ChatMessage>, ChatError> {
        let history = self.lock_history()?;
        Ok(history.iter().cloned().collect())
    }

    pub fn clear_history(&self) -> Result<(), ChatError> {
        self.lock_history()?.clear();
        Ok(())
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Append a user turn and its reply under one lock, then drop the oldest
    /// exchanges until the history fits `history_limit`.
    fn record_exchange(&self, question: &str, response: &Response) -> Result<(), ChatError> {
        let now = Local::now().timestamp();
        let mut history = self.lock_history()?;
        history.push_back(ChatMessage {
            id: Uuid::new_v4(),
            role: Role::User,
            content: question.to_string(),
            kind: None,
            created_at: now,
        });
        history.push_back(ChatMessage {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: response.text.clone(),
            kind: Some(response.kind),
            created_at: now,
        });
        while history.len() > self.config.history_limit {
            // Whole exchanges only, so the history never starts with a reply.
            history.pop_front();
            history.pop_front();
        }
        Ok(())
    }

    fn lock_history(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, VecDeque<ChatMessage>>, ChatError> {
        self.history
            .lock()
            .map_err(|e| ChatError::HistoryError(format!("history lock poisoned: {}", e)))
    }
}
