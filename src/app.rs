//! Root application component with the auth gate, routing, and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::{chat::ChatPage, login::LoginPage, stores::StoresPage, weather::WeatherPage};
use crate::state::auth::AuthSession;
use crate::state::{chat::ChatState, stores::StoresState, ui::UiState, weather::WeatherState};
use crate::util::session::WebSessionStore;

/// Shared auth context: the one [`AuthSession`] behind a reactive signal.
pub type SharedAuth = RwSignal<AuthSession<WebSessionStore>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted user record, provides the shared state
/// contexts, and gates the routed shell behind authentication: an empty
/// user id renders the login surface instead. The gate reads the record
/// through the signal, so it re-evaluates on every auth mutation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore before anything can read the record. The sessionStorage
    // read is synchronous, so the gate never sees a pre-restore state.
    let mut session = AuthSession::new(WebSessionStore);
    session.restore();

    let auth: SharedAuth = RwSignal::new(session);
    let chat = RwSignal::new(ChatState::default());
    let stores = RwSignal::new(StoresState::default());
    let weather = RwSignal::new(WeatherState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(stores);
    provide_context(weather);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/townlens.css"/>
        <Title text="Townlens"/>

        <Router>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <LoginPage/> }
            >
                <div class="app-shell">
                    <Sidebar/>
                    <main class="app-shell__content">
                        <Routes fallback=|| view! { <Redirect path="/"/> }>
                            <Route path=StaticSegment("") view=ChatPage/>
                            <Route path=StaticSegment("stores") view=StoresPage/>
                            <Route path=StaticSegment("weather") view=WeatherPage/>
                        </Routes>
                    </main>
                </div>
            </Show>
        </Router>
    }
}
