//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form state, API calls)
//! and delegates shared chrome to `components`.

pub mod home;
pub mod login;
pub mod register;
