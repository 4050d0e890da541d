//! Client state modules shared through Leptos context providers.

pub mod auth;
