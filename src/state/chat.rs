#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, ChatRoom, LlmTurn};

/// Maximum number of prior turns sent to the LLM with each message.
pub const MAX_CONTEXT: usize = 20;

/// State for the chat page: room list on the left, message thread on the
/// right.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub rooms: Option<Vec<ChatRoom>>,
    pub rooms_loading: bool,
    pub rooms_error: Option<String>,
    pub selected_room: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub messages_loading: bool,
    pub messages_error: Option<String>,
    pub sending: bool,
}

impl ChatState {
    /// Append an optimistic user message and mark the send in flight.
    pub fn push_pending(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.sending = true;
    }

    /// Settle an optimistic send: swap the temporary id for the stored
    /// one (when the backend returned the user document) and append the
    /// assistant reply.
    pub fn confirm_exchange(
        &mut self,
        pending_id: &str,
        stored_id: Option<String>,
        reply: ChatMessage,
    ) {
        if let Some(stored_id) = stored_id {
            for msg in &mut self.messages {
                if msg.id == pending_id {
                    msg.id = stored_id;
                    break;
                }
            }
        }
        self.messages.push(reply);
        self.sending = false;
    }

    /// Roll back an optimistic send that the backend rejected.
    pub fn drop_pending(&mut self, pending_id: &str) {
        self.messages.retain(|m| m.id != pending_id);
        self.sending = false;
    }
}

/// Sort messages oldest-first. Timestamps are RFC 3339 strings, so the
/// lexicographic order is the chronological order.
pub fn sort_oldest_first(messages: &mut [ChatMessage]) {
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}

/// Build the context window for an LLM request: the last `limit` turns in
/// chronological order, reduced to role and content.
pub fn history_window(messages: &[ChatMessage], limit: usize) -> Vec<LlmTurn> {
    let mut ordered: Vec<&ChatMessage> = messages.iter().collect();
    ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let skip = ordered.len().saturating_sub(limit);
    ordered
        .into_iter()
        .skip(skip)
        .map(|m| LlmTurn {
            role: m.role,
            content: m.text.clone(),
        })
        .collect()
}
