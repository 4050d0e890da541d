//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; shared behavior lives in
//! `util`, `net`, and `components`.

pub mod dashboard;
pub mod home;
pub mod login;
