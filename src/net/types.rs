//! Shared wire DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips
//! stay lossless; fields the UI does not render are simply omitted here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A menu entry shown on the public storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in cents.
    pub price_cents: u32,
}

/// A customer order as listed on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    pub customer_name: String,
    /// Fulfillment status string as reported by the server
    /// (e.g. `"pending"`, `"delivered"`).
    pub status: String,
    /// Order total in cents.
    pub total_cents: u32,
}

/// Credentials for `POST /api/admin/login`.
#[derive(Clone, Debug, Serialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// Successful login response carrying the session token.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
}
