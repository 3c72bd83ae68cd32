//! Authentication state shared through context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and startup progress.
///
/// `loading` starts `true` and flips to `false` exactly once, when startup
/// session resolution finishes. Route guards must not act while `loading`
/// is set; otherwise a persisted session would bounce through `/login` on
/// every reload.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> AuthState {
        AuthState {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Signed-in user, available only after resolution.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True once resolution finished with a signed-in user.
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
