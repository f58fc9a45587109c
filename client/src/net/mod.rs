//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser HTTP calls and `types` defines the shared JSON
//! schema exchanged with the server.

pub mod api;
pub mod types;
