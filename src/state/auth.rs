//! Admin-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and admin pages to coordinate login redirects
//! and session-dependent rendering. The token is loaded once at startup
//! from localStorage by the app shell; login and logout update the signal
//! and the store together. The guard itself never touches storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state derived from the stored admin token.
///
/// Presence of a non-empty token is the whole signal: the token is not
/// parsed, not validated, and carries no expiry client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    /// Build the state from an optionally stored token. Empty strings
    /// count as absent.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    /// Whether an admin session token is present.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.token.is_some()
    }

    /// The stored token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
