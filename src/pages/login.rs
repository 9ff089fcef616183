//! Login surface with a registration form toggle.

use leptos::prelude::*;

use crate::app::SharedAuth;

/// Login page — email/password form that drives the auth session, plus a
/// registration form backed by `/api/signup`.
///
/// The submit control is disabled while an exchange is in flight, which
/// is what keeps the one-call-at-a-time contract of the auth session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<SharedAuth>();

    let register_mode = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    // Registration status text; login errors come from the auth session.
    let notice = RwSignal::new(String::new());

    let loading = move || auth.get().user().loading;
    let message = move || auth.get().user().message.clone();

    let submit_login = move || {
        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get();
            let password_value = password.get();
            // Empty fields are the sentinel, not a real attempt.
            if email_value.trim().is_empty() || password_value.is_empty() || loading() {
                return;
            }

            #[cfg(feature = "dev-login")]
            {
                let mut bypassed = false;
                auth.update(|session| bypassed = session.login_dev(&email_value, &password_value));
                if bypassed {
                    return;
                }
            }

            // loading flips before the request leaves.
            auth.update(|session| session.begin_login());
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(ok) => auth.update(|session| session.resolve_success(&ok.token)),
                    Err(text) => auth.update(|session| session.resolve_failure(&text)),
                }
            });
        }
    };

    let submit_register = move || {
        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get();
            let password_value = password.get();
            if email_value.trim().is_empty() || password_value.is_empty() {
                return;
            }
            if password_value != confirm.get() {
                notice.set("Passwords do not match.".to_owned());
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&email_value, &password_value).await {
                    Ok(()) => {
                        email.set(String::new());
                        password.set(String::new());
                        confirm.set(String::new());
                        notice.set("Registration succeeded. You can log in now.".to_owned());
                        register_mode.set(false);
                    }
                    Err(text) => notice.set(text),
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if register_mode.get() {
            submit_register();
        } else {
            submit_login();
        }
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1 class="login-page__title">"Townlens"</h1>
                <p class="login-page__subtitle">"Your town, one dashboard"</p>

                <div class="login-page__tabs">
                    <button
                        class=move || {
                            if register_mode.get() { "tab" } else { "tab tab--active" }
                        }
                        on:click=move |_| {
                            register_mode.set(false);
                            notice.set(String::new());
                        }
                    >
                        "Log in"
                    </button>
                    <button
                        class=move || {
                            if register_mode.get() { "tab tab--active" } else { "tab" }
                        }
                        on:click=move |_| {
                            register_mode.set(true);
                            notice.set(String::new());
                        }
                    >
                        "Register"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <label class="login-page__label">
                        "Email"
                        <input
                            class="login-page__input"
                            type="text"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-page__label">
                        "Password"
                        <div class="login-page__password-row">
                            <input
                                class="login-page__input"
                                type=password_type
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="login-page__reveal"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <Show when=move || register_mode.get()>
                        <label class="login-page__label">
                            "Confirm password"
                            <input
                                class="login-page__input"
                                type=password_type
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <button
                        type="submit"
                        class="btn btn--primary login-page__submit"
                        disabled=loading
                    >
                        {move || {
                            if register_mode.get() {
                                "Register"
                            } else if loading() {
                                "Signing in..."
                            } else {
                                "Log in"
                            }
                        }}
                    </button>
                </form>

                <Show when=move || !message().is_empty()>
                    <p class="login-page__error">{message}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-page__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
