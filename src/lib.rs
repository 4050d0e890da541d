//! Storefront client application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires the route table, constructs the process-wide [`ApiConfig`] once,
//! loads the stored admin session once, and provides both through context
//! so pages and the route guard never reach into globals themselves.

pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::require_admin::RequireAdmin;
use crate::net::config::ApiConfig;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::util::session;

/// Root component: context providers plus the route table.
///
/// `/admin` is the only protected route; everything behind it is wrapped
/// in [`RequireAdmin`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Set once at startup; read-only afterwards.
    provide_context(ApiConfig::from_build_env());

    // Loaded once from localStorage; login and logout update the signal.
    let auth = RwSignal::new(AuthState::from_token(session::load_token()));
    provide_context(auth);

    view! {
        <Title text="Storefront"/>
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/admin/login") view=LoginPage/>
                <Route
                    path=path!("/admin")
                    view=|| {
                        view! {
                            <RequireAdmin>
                                <DashboardPage/>
                            </RequireAdmin>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// WASM entry point: install panic reporting and console logging, then
/// mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
