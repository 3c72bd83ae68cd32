//! Session lifecycle orchestration: startup resolution, login, signup,
//! refresh, logout.
//!
//! DESIGN
//! ======
//! The manager is the only writer of the reactive auth state. Every path
//! ends in `publish`, which atomically replaces the `{ user, loading }`
//! pair, so views never observe a half-updated session. Decisions that do
//! not need the network (`validate_signup`, `resolve_startup`) are free
//! functions so they stay testable without a browser.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Registration, Role, User};
use crate::session::store::SessionStore;
use crate::state::auth::AuthState;

/// Minimum accepted password length, matching the backend rule.
const MIN_PASSWORD_LEN: usize = 6;

/// Raw signup form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub role: Option<Role>,
}

/// Validate a signup form locally; no request is sent for invalid input.
///
/// Checks run in a fixed order (mismatch, length, role) so the user sees
/// one problem at a time.
pub fn validate_signup(input: &SignupInput) -> Result<Registration, ApiError> {
    if input.password != input.confirm_password {
        return Err(ApiError::Validation("Passwords do not match.".to_owned()));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(
            "Passwords must be at least 6 characters.".to_owned(),
        ));
    }
    let Some(role) = input.role else {
        return Err(ApiError::Validation("Please choose a role.".to_owned()));
    };
    Ok(Registration {
        email: input.email.trim().to_owned(),
        password: input.password.clone(),
        name: input.name.trim().to_owned(),
        role,
    })
}

/// How startup should treat the persisted session.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupResolution {
    /// No token: begin signed out.
    SignedOut,
    /// Token plus a well-formed cached record: trust the cache, skip the
    /// network round-trip.
    UseCached(User),
    /// Token but no usable cached record: confirm against `/me`.
    Refresh,
}

/// Resolve stored token + cached user into a startup action.
///
/// A cached record without a valid server identifier is never trusted; it
/// forces the refresh path instead.
pub fn resolve_startup(token: Option<&str>, cached: Option<User>) -> StartupResolution {
    if token.is_none() {
        return StartupResolution::SignedOut;
    }
    match cached {
        Some(user) if user.has_valid_id() => StartupResolution::UseCached(user),
        _ => StartupResolution::Refresh,
    }
}

/// Drives the session lifecycle and publishes it into [`AuthState`].
///
/// Cheap to clone; clones share the store, client, and auth signal.
#[derive(Clone)]
pub struct SessionManager {
    store: SessionStore,
    api: ApiClient,
    auth: RwSignal<AuthState>,
}

impl SessionManager {
    pub fn new(store: SessionStore, api: ApiClient, auth: RwSignal<AuthState>) -> SessionManager {
        SessionManager { store, api, auth }
    }

    /// Resolve the persisted session into the initial auth state.
    ///
    /// Runs once at startup. Until it finishes, `AuthState::loading` stays
    /// `true` and route guards hold their fire.
    pub async fn initialize(&self) {
        match resolve_startup(self.store.token().as_deref(), self.store.cached_user()) {
            StartupResolution::SignedOut => {
                #[cfg(feature = "hydrate")]
                log::info!("session: no stored token; starting signed out");
                self.publish(None);
            }
            StartupResolution::UseCached(user) => {
                #[cfg(feature = "hydrate")]
                log::info!("session: resuming user {} from cached record", user.id);
                self.publish(Some(user));
            }
            StartupResolution::Refresh => {
                #[cfg(feature = "hydrate")]
                log::info!("session: token without usable cached record; confirming with /me");
                if let Err(_error) = self.refresh_user_record().await {
                    #[cfg(feature = "hydrate")]
                    log::warn!("session: startup refresh failed: {_error}");
                }
            }
        }
    }

    /// Exchange credentials for a session, fetch the user record, and
    /// publish it. On a failed login no token is stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response = self.api.login(credentials).await?;
        self.store.set_token(&response.token);
        // Token is kept even if the record fetch fails; the next visit
        // resolves it through the startup refresh path.
        let user = self.api.me().await?;
        self.store.set_cached_user(&user);
        self.publish(Some(user.clone()));
        #[cfg(feature = "hydrate")]
        log::info!("session: user {} logged in", user.id);
        Ok(user)
    }

    /// Validate and submit a signup. The account still has to log in
    /// afterwards; no session state changes here.
    pub async fn signup(&self, input: &SignupInput) -> Result<(), ApiError> {
        let registration = validate_signup(input)?;
        self.api.signup(&registration).await
    }

    /// Cache and publish a record the server just returned (e.g. from a
    /// profile update), skipping the extra `/me` round-trip.
    pub fn adopt_user_record(&self, user: &User) {
        self.store.set_cached_user(user);
        self.publish(Some(user.clone()));
    }

    /// Re-fetch `/me` and republish the record.
    ///
    /// Any failure here means the session cannot be proven valid, so the
    /// stored session is dropped and the caller sees `SessionInvalidated`.
    pub async fn refresh_user_record(&self) -> Result<User, ApiError> {
        match self.api.me().await {
            Ok(user) => {
                self.store.set_cached_user(&user);
                self.publish(Some(user.clone()));
                Ok(user)
            }
            Err(_error) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session: user record refresh failed: {_error}");
                self.store.clear();
                self.publish(None);
                Err(ApiError::SessionInvalidated)
            }
        }
    }

    /// Drop the session locally. The backend holds no server-side session
    /// state, so no request is involved.
    pub fn logout(&self) {
        self.store.clear();
        self.publish(None);
        #[cfg(feature = "hydrate")]
        log::info!("session: logged out");
    }

    /// Token and cached record are both present.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.cached_user()
    }

    fn publish(&self, user: Option<User>) {
        self.auth.set(AuthState {
            user,
            loading: false,
        });
    }
}
