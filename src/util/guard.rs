//! Route-guard decision shared by protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route must apply identical render-or-redirect behavior.
//! The decision itself is pure: callers supply the current auth state
//! rather than the guard reading browser storage.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Fixed destination for unauthenticated admin traffic.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Outcome of evaluating the guard against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected children unchanged.
    Render,
    /// Render nothing and navigate to [`ADMIN_LOGIN_PATH`].
    RedirectToLogin,
}

/// Evaluate the guard. Decided freshly on every call; nothing is cached
/// across evaluations.
#[must_use]
pub fn evaluate(auth: &AuthState) -> GuardOutcome {
    if auth.is_admin() {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Navigate to the admin login page whenever the auth state lacks a
/// session token.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if evaluate(&auth.get()) == GuardOutcome::RedirectToLogin {
            navigate(ADMIN_LOGIN_PATH, NavigateOptions::default());
        }
    });
}
