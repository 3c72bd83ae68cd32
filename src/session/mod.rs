//! Authenticated-session subsystem.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` owns the persisted token + cached user record (localStorage with
//! an in-memory mirror); `manager` drives the session lifecycle (startup
//! resolution, login, signup, refresh, logout) and publishes the outcome
//! into the reactive [`crate::state::auth::AuthState`].

pub mod manager;
pub mod store;
