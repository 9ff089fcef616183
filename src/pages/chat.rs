//! LLM chat page: room list on the left, message thread on the right.

use leptos::prelude::*;

use crate::app::SharedAuth;
use crate::state::chat::ChatState;

/// Chat page — lists the user's rooms, shows the selected room's thread
/// and sends messages with an optimistic append that rolls back if the
/// backend rejects the exchange.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<SharedAuth>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let new_room_title = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let thread_ref = NodeRef::<leptos::html::Div>::new();

    // Keyed on the id alone so loading/message churn on the auth record
    // does not retrigger the room reload.
    let user_id = Memo::new(move |_| auth.get().user().id.clone());

    // Load the room list on mount and whenever the user changes.
    Effect::new(move || {
        let uid = user_id.get();
        if uid.is_empty() {
            chat.update(|c| {
                c.rooms_loading = false;
                c.rooms_error = Some("Not signed in.".to_owned());
            });
            return;
        }
        chat.update(|c| {
            c.rooms_loading = true;
            c.rooms_error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_rooms(&uid).await {
                Ok(rooms) => chat.update(|c| {
                    c.rooms_loading = false;
                    c.rooms = Some(rooms);
                }),
                Err(text) => chat.update(|c| {
                    c.rooms_loading = false;
                    c.rooms_error = Some(text);
                }),
            }
        });
    });

    // Load the thread when the selection changes. The memo keeps this
    // effect from retriggering on unrelated chat-state writes.
    let selected = Memo::new(move |_| chat.get().selected_room.clone());
    Effect::new(move || {
        let Some(room_id) = selected.get() else {
            return;
        };
        let uid = user_id.get();
        if uid.is_empty() {
            return;
        }
        chat.update(|c| {
            c.messages_loading = true;
            c.messages_error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_room_messages(&room_id, &uid).await {
                Ok(mut messages) => {
                    crate::state::chat::sort_oldest_first(&mut messages);
                    chat.update(|c| {
                        c.messages_loading = false;
                        c.messages = messages;
                    });
                }
                Err(text) => chat.update(|c| {
                    c.messages_loading = false;
                    c.messages_error = Some(text);
                    c.messages = Vec::new();
                }),
            }
        });
    });

    // Keep the thread scrolled to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = thread_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_create = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if creating.get() {
                return;
            }
            let uid = user_id.get_untracked();
            if uid.is_empty() {
                return;
            }
            let title = {
                let raw = new_room_title.get();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    "New chat".to_owned()
                } else {
                    trimmed.to_owned()
                }
            };

            creating.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_room(&uid, &title).await {
                    Ok(room) => {
                        let room_id = room.id.clone();
                        match crate::net::api::fetch_rooms(&uid).await {
                            Ok(rooms) => chat.update(|c| {
                                c.rooms = Some(rooms);
                                c.selected_room = Some(room_id);
                            }),
                            Err(text) => chat.update(|c| c.rooms_error = Some(text)),
                        }
                    }
                    Err(text) => log::warn!("create room failed: {text}"),
                }
                new_room_title.set(String::new());
                creating.set(false);
            });
        }
    };

    let do_send = move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::{ChatMessage, ChatRole};
            use crate::state::chat::{MAX_CONTEXT, history_window};

            let state = chat.get_untracked();
            let Some(room_id) = state.selected_room.clone() else {
                return;
            };
            let uid = user_id.get_untracked();
            let text = input.get();
            if uid.is_empty() || text.trim().is_empty() || state.sending {
                return;
            }

            let pending = ChatMessage {
                id: format!("temp-{}", js_sys::Date::now()),
                room_id: room_id.clone(),
                user_id: uid.clone(),
                role: ChatRole::User,
                text: text.trim().to_owned(),
                created_at: js_sys::Date::new_0()
                    .to_iso_string()
                    .as_string()
                    .unwrap_or_default(),
            };
            let pending_id = pending.id.clone();

            // Context window includes the message being sent.
            let history = {
                let mut all = state.messages.clone();
                all.push(pending.clone());
                history_window(&all, MAX_CONTEXT)
            };

            chat.update(|c| c.push_pending(pending));
            input.set(String::new());

            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat(&room_id, &uid, &history).await {
                    Ok(exchange) => chat.update(|c| {
                        c.confirm_exchange(
                            &pending_id,
                            exchange.user_doc.map(|doc| doc.id),
                            exchange.ai_doc,
                        );
                    }),
                    Err(text) => {
                        log::warn!("chat send failed: {text}");
                        chat.update(|c| c.drop_pending(&pending_id));
                    }
                }
            });
        }
    };

    let on_send = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !chat.get_untracked().sending {
            ev.prevent_default();
            do_send();
        }
    };

    let sending = move || chat.get().sending;

    view! {
        <div class="chat-page">
            <div class="chat-page__rooms">
                <h1 class="chat-page__heading">"Chat rooms"</h1>

                <div class="chat-page__create-row">
                    <input
                        class="chat-page__create-input"
                        type="text"
                        placeholder="Room title (optional)"
                        prop:value=move || new_room_title.get()
                        on:input=move |ev| new_room_title.set(event_target_value(&ev))
                        disabled=move || creating.get()
                    />
                    <button
                        class="btn btn--primary"
                        on:click=on_create
                        disabled=move || creating.get()
                    >
                        {move || if creating.get() { "Creating..." } else { "New chat" }}
                    </button>
                </div>

                {move || {
                    let state = chat.get();
                    if state.rooms_loading {
                        return view! { <p class="chat-page__hint">"Loading rooms..."</p> }
                            .into_any();
                    }
                    if let Some(error) = state.rooms_error {
                        return view! { <p class="chat-page__error">{error}</p> }.into_any();
                    }
                    let rooms = state.rooms.unwrap_or_default();
                    if rooms.is_empty() {
                        return view! { <p class="chat-page__hint">"No rooms yet."</p> }
                            .into_any();
                    }

                    rooms
                        .into_iter()
                        .map(|room| {
                            let room_id = room.id.clone();
                            let active = state.selected_room.as_deref() == Some(room.id.as_str());
                            view! {
                                <div
                                    class=if active {
                                        "chat-page__room chat-page__room--active"
                                    } else {
                                        "chat-page__room"
                                    }
                                    on:click=move |_| {
                                        chat.update(|c| c.selected_room = Some(room_id.clone()));
                                    }
                                >
                                    <p class="chat-page__room-title">{room.title}</p>
                                    <span class="chat-page__room-meta">
                                        {format!("last chat {}", room.last_chat_at)}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-page__thread">
                <Show
                    when=move || chat.get().selected_room.is_some()
                    fallback=|| {
                        view! {
                            <div class="chat-page__empty">
                                <h2>"Pick a room or create one"</h2>
                                <p>"Use the New chat button to start a conversation."</p>
                            </div>
                        }
                    }
                >
                    <div class="chat-page__messages" node_ref=thread_ref>
                        {move || {
                            let state = chat.get();
                            if state.messages_loading {
                                return view! { <p class="chat-page__hint">"Loading messages..."</p> }
                                    .into_any();
                            }
                            if let Some(error) = state.messages_error {
                                return view! { <p class="chat-page__error">{error}</p> }
                                    .into_any();
                            }
                            if state.messages.is_empty() {
                                return view! {
                                    <p class="chat-page__hint">"No messages yet. Say hello."</p>
                                }
                                    .into_any();
                            }

                            state
                                .messages
                                .iter()
                                .map(|msg| {
                                    let mine = msg.role == crate::net::types::ChatRole::User;
                                    view! {
                                        <div class=if mine {
                                            "chat-page__message chat-page__message--mine"
                                        } else {
                                            "chat-page__message chat-page__message--ai"
                                        }>
                                            <span class="chat-page__author">
                                                {if mine { "Me" } else { "AI" }}
                                            </span>
                                            <p class="chat-page__text">{msg.text.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>

                    <div class="chat-page__input-row">
                        <input
                            class="chat-page__input"
                            type="text"
                            placeholder=move || {
                                if sending() { "Sending..." } else { "Type a message..." }
                            }
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                            disabled=sending
                        />
                        <button
                            class="btn btn--primary chat-page__send"
                            on:click=on_send
                            disabled=sending
                        >
                            {move || if sending() { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
