//! Public storefront page listing the menu.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::config::ApiConfig;
use crate::net::types::MenuItem;

fn format_price_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Home page — fetches the menu once on mount and renders it.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let items = RwSignal::new(Vec::<MenuItem>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            if let Some(menu) = crate::net::api::fetch_menu(&config).await {
                items.set(menu);
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &config;
        loading.set(false);
    }

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Menu"</h1>
                <A href="/admin">"Admin"</A>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="home-loading">"Loading menu..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! { <p class="home-empty">"The menu is empty right now."</p> }
                >
                    <ul class="menu-list">
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=|item: MenuItem| {
                                let price = format_price_cents(item.price_cents);
                                view! {
                                    <li class="menu-item">
                                        <span class="menu-item__name">{item.name.clone()}</span>
                                        <span class="menu-item__desc">
                                            {item.description.clone().unwrap_or_default()}
                                        </span>
                                        <span class="menu-item__price">{price}</span>
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
