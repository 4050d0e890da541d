//! REST helpers for communicating with the storefront API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning `None`/error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{MenuItem, Order};
#[cfg(feature = "csr")]
use super::types::{AdminLoginRequest, AdminLoginResponse};

/// Public menu listing.
pub const MENU_ENDPOINT: &str = "/api/menu";
/// Admin-only order listing; requires a bearer token.
pub const ORDERS_ENDPOINT: &str = "/api/admin/orders";
/// Password exchange for an admin session token.
pub const ADMIN_LOGIN_ENDPOINT: &str = "/api/admin/login";

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch the public menu. Returns `None` on any failure or on the
/// native target.
pub async fn fetch_menu(config: &ApiConfig) -> Option<Vec<MenuItem>> {
    #[cfg(feature = "csr")]
    {
        let url = config.build_url(MENU_ENDPOINT);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::warn!("menu request failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<MenuItem>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}

/// Fetch the order list with the admin session token attached as a
/// bearer header.
pub async fn fetch_orders(config: &ApiConfig, token: &str) -> Option<Vec<Order>> {
    #[cfg(feature = "csr")]
    {
        let url = config.build_url(ORDERS_ENDPOINT);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("orders request failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<Order>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token);
        None
    }
}

/// Exchange the admin password for a session token via
/// `POST /api/admin/login`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent, the server
/// rejects the credentials, or the response body does not parse.
pub async fn admin_login(config: &ApiConfig, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let url = config.build_url(ADMIN_LOGIN_ENDPOINT);
        let body = AdminLoginRequest { password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: AdminLoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, password);
        Err("not available outside the browser".to_owned())
    }
}
