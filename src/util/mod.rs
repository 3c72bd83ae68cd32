//! Shared UI helpers.

pub mod auth;
pub mod image;
