//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: wait for
//! session resolution, then send unauthenticated visitors to `/login` and
//! wrong-role visitors back to their profile.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Redirect decision for protected routes. Never redirects while the
/// session is still being resolved.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect decision for role-restricted routes. A signed-out visitor is
/// not a role mismatch; the unauth redirect owns that case.
pub fn should_redirect_role(state: &AuthState, required: Role) -> bool {
    if state.loading {
        return false;
    }
    state.user.as_ref().is_some_and(|user| user.role != required)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/profile` whenever the signed-in user's role does not match
/// the route's required role.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(|state| should_redirect_role(state, required)) {
            navigate("/profile", NavigateOptions::default());
        }
    });
}
