//! Reusable UI components shared by the route pages.

pub mod auth_card;
