//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation, hashing, and persistence so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod account;
pub mod password;
pub mod session;
