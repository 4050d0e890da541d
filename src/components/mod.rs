//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers installed
//! by the app shell.

pub mod require_admin;
