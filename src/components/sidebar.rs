//! Collapsible navigation sidebar with the logout control.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::SharedAuth;
use crate::state::ui::UiState;

/// Sidebar with links to the three dashboard views and a logout button.
///
/// Collapsed mode keeps the toggle and icons only. Logout resets the
/// auth session; the route gate reacts and swaps in the login surface.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<SharedAuth>();
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move || ui.get().sidebar_open;
    let on_toggle = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);
    let on_logout = move |_| auth.update(|session| session.logout());

    let shell_class = move || {
        if open() {
            "sidebar sidebar--open"
        } else {
            "sidebar sidebar--collapsed"
        }
    };

    view! {
        <aside class=shell_class>
            <div class="sidebar__header">
                <span class="sidebar__mark">"◆"</span>
                <Show when=open>
                    <h2 class="sidebar__title">"Townlens"</h2>
                </Show>
                <button class="sidebar__toggle" on:click=on_toggle title="Toggle sidebar">
                    {move || if open() { "«" } else { "»" }}
                </button>
            </div>

            <nav class="sidebar__nav">
                <A href="/" attr:class="sidebar__link">
                    <span class="sidebar__icon">"💬"</span>
                    <Show when=open>
                        <span>"Chat"</span>
                    </Show>
                </A>
                <A href="/stores" attr:class="sidebar__link">
                    <span class="sidebar__icon">"🏪"</span>
                    <Show when=open>
                        <span>"Stores"</span>
                    </Show>
                </A>
                <A href="/weather" attr:class="sidebar__link">
                    <span class="sidebar__icon">"☀"</span>
                    <Show when=open>
                        <span>"Weather"</span>
                    </Show>
                </A>
            </nav>

            <div class="sidebar__footer">
                <button class="btn btn--danger sidebar__logout" on:click=on_logout>
                    <Show when=open fallback=|| "⏻">
                        "Log out"
                    </Show>
                </button>
            </div>
        </aside>
    }
}
