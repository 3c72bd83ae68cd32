//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `mentors`, `requests`) so individual
//! pages can depend on small focused models. The reactive wrappers
//! (`RwSignal<...>`) are created at the app root and provided via context.

pub mod auth;
pub mod mentors;
pub mod requests;
