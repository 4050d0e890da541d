//! Admin login page exchanging a password for a session token.
//!
//! On success the token is stored, the auth signal is updated, and the
//! browser navigates to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::state::auth::AuthState;

fn login_failed_info(err: &str) -> String {
    format!("Login failed: {err}")
}

/// Admin login page — password form plus status line.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        if password_value.is_empty() {
            info.set("Enter the admin password first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_login(&config, &password_value).await {
                    Ok(token) => {
                        crate::util::session::store_token(&token);
                        auth.set(AuthState::from_token(Some(token)));
                        navigate("/admin", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(login_failed_info(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &navigate, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Sign In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
