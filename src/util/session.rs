//! Browser localStorage glue for the admin session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes csr-only read/write behavior so pages can persist the
//! session without repeating web-sys glue. The route guard never calls
//! the write side; login stores and logout clears.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// localStorage key holding the admin session token.
pub const TOKEN_KEY: &str = "storefront_admin_token";

/// Load the stored admin token. Returns `None` outside the browser or
/// when no token has been stored.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist `token` as the current admin session. Best-effort; a failed
/// write only means the session will not survive a reload.
pub fn store_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the stored admin session, if any. Best-effort.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
