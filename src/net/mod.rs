//! Networking modules for REST calls against the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` owns request-URL construction, `api` performs the HTTP calls,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod config;
pub mod types;
