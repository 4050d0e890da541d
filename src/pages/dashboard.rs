//! Admin dashboard listing customer orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route; the router wraps it in
//! `RequireAdmin`, so by the time it renders a session token is present.
//! Logout clears the stored token and returns to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::util::guard::ADMIN_LOGIN_PATH;
use crate::util::session;

fn order_count_label(count: usize) -> String {
    if count == 1 {
        "1 order".to_owned()
    } else {
        format!("{count} orders")
    }
}

/// Dashboard page — shows the order list and a logout action.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let token = auth.get_untracked().token().unwrap_or_default().to_owned();
            if let Some(list) = crate::net::api::fetch_orders(&config, &token).await {
                orders.set(list);
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &config;
        loading.set(false);
    }

    let on_logout = move |_| {
        session::clear_token();
        auth.set(AuthState::default());
        navigate(ADMIN_LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Orders"</h1>
                <span class="dashboard-count">
                    {move || order_count_label(orders.get().len())}
                </span>
                <button class="dashboard-logout" on:click=on_logout>"Log out"</button>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="dashboard-loading">"Loading orders..."</p> }
            >
                <Show
                    when=move || !orders.get().is_empty()
                    fallback=|| view! { <p class="dashboard-empty">"No orders yet."</p> }
                >
                    <ul class="order-list">
                        <For
                            each=move || orders.get()
                            key=|order| order.id.clone()
                            children=|order: Order| {
                                view! {
                                    <li class="order-row">
                                        <span class="order-row__customer">
                                            {order.customer_name.clone()}
                                        </span>
                                        <span class="order-row__status">{order.status.clone()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
