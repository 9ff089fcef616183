use super::*;
use crate::net::types::ChatRole;

fn message(id: &str, role: ChatRole, text: &str, created_at: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        room_id: "room-1".to_owned(),
        user_id: "abc123".to_owned(),
        role,
        text: text.to_owned(),
        created_at: created_at.to_owned(),
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_defaults() {
    let s = ChatState::default();
    assert!(s.rooms.is_none());
    assert!(s.selected_room.is_none());
    assert!(s.messages.is_empty());
    assert!(!s.sending);
}

// =============================================================
// Ordering and context window
// =============================================================

#[test]
fn sort_oldest_first_orders_by_timestamp() {
    let mut messages = vec![
        message("b", ChatRole::Assistant, "second", "2025-08-16T10:01:00Z"),
        message("a", ChatRole::User, "first", "2025-08-16T10:00:00Z"),
    ];
    sort_oldest_first(&mut messages);
    assert_eq!(messages[0].id, "a");
    assert_eq!(messages[1].id, "b");
}

#[test]
fn history_window_keeps_last_turns_in_order() {
    let messages: Vec<ChatMessage> = (0..5)
        .map(|i| {
            message(
                &format!("m{i}"),
                ChatRole::User,
                &format!("turn {i}"),
                &format!("2025-08-16T10:0{i}:00Z"),
            )
        })
        .collect();

    let window = history_window(&messages, 3);
    assert_eq!(window.len(), 3);
    assert_eq!(window[0].content, "turn 2");
    assert_eq!(window[2].content, "turn 4");
}

#[test]
fn history_window_sorts_before_truncating() {
    let messages = vec![
        message("new", ChatRole::Assistant, "newest", "2025-08-16T12:00:00Z"),
        message("old", ChatRole::User, "oldest", "2025-08-16T09:00:00Z"),
    ];
    let window = history_window(&messages, 1);
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].content, "newest");
    assert_eq!(window[0].role, ChatRole::Assistant);
}

#[test]
fn history_window_shorter_than_limit_keeps_everything() {
    let messages = vec![message("a", ChatRole::User, "hi", "2025-08-16T10:00:00Z")];
    let window = history_window(&messages, MAX_CONTEXT);
    assert_eq!(window.len(), 1);
}

// =============================================================
// Optimistic send
// =============================================================

#[test]
fn push_pending_appends_and_marks_sending() {
    let mut state = ChatState::default();
    state.push_pending(message("temp-1", ChatRole::User, "hello", "2025-08-16T10:00:00Z"));
    assert_eq!(state.messages.len(), 1);
    assert!(state.sending);
}

#[test]
fn confirm_exchange_swaps_id_and_appends_reply() {
    let mut state = ChatState::default();
    state.push_pending(message("temp-1", ChatRole::User, "hello", "2025-08-16T10:00:00Z"));
    state.confirm_exchange(
        "temp-1",
        Some("stored-1".to_owned()),
        message("ai-1", ChatRole::Assistant, "hi there", "2025-08-16T10:00:01Z"),
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].id, "stored-1");
    assert_eq!(state.messages[1].role, ChatRole::Assistant);
    assert!(!state.sending);
}

#[test]
fn confirm_exchange_without_stored_id_keeps_temp_id() {
    let mut state = ChatState::default();
    state.push_pending(message("temp-1", ChatRole::User, "hello", "2025-08-16T10:00:00Z"));
    state.confirm_exchange(
        "temp-1",
        None,
        message("ai-1", ChatRole::Assistant, "hi", "2025-08-16T10:00:01Z"),
    );
    assert_eq!(state.messages[0].id, "temp-1");
}

#[test]
fn drop_pending_rolls_back_the_optimistic_message() {
    let mut state = ChatState::default();
    state.messages.push(message("m0", ChatRole::Assistant, "earlier", "2025-08-16T09:00:00Z"));
    state.push_pending(message("temp-1", ChatRole::User, "hello", "2025-08-16T10:00:00Z"));

    state.drop_pending("temp-1");
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, "m0");
    assert!(!state.sending);
}
