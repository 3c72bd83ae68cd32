//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the shared wire schema,
//! and `error` classifies failures into the outcomes the UI reacts to.

pub mod api;
pub mod error;
pub mod types;
