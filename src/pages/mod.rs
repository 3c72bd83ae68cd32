//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, submits) and
//! delegates shared rendering details to `components`.

pub mod edit_profile;
pub mod login;
pub mod match_requests;
pub mod mentors;
pub mod profile;
pub mod signup;
