//! Route guard wrapping admin-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps protected routes in this component so every admin
//! screen shares the same render-or-redirect behavior. Auth state arrives
//! through context; the guard performs no storage reads or writes of its
//! own and caches nothing between evaluations.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::guard::{self, GuardOutcome};

/// Render `children` unchanged while an admin session token is present;
/// otherwise render nothing and navigate to the admin login page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    guard::install_unauth_redirect(auth, navigate);

    view! {
        <Show when=move || guard::evaluate(&auth.get()) == GuardOutcome::Render>
            {children()}
        </Show>
    }
}
