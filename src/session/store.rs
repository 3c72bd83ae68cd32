//! Persistent session state: token and cached user record.
//!
//! DESIGN
//! ======
//! The store is an explicitly owned object created once at app startup and
//! handed to collaborators (HTTP client, session manager) rather than a
//! global. It keeps an in-memory mirror of the two localStorage keys so
//! reads stay synchronous and the same code runs during server rendering,
//! where no browser storage exists.
//!
//! Writes go through to localStorage on the hydrate build; a failed write
//! (private browsing, quota) leaves the in-memory session usable for the
//! current page visit.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User, UserProfile};

/// localStorage key holding the raw session token.
const TOKEN_KEY: &str = "authToken";
/// localStorage key holding the serialized user record.
const USER_KEY: &str = "user";

/// Persisted shape of the cached user record.
///
/// The profile name is duplicated at the top level, matching what previous
/// client versions wrote, so stored records stay readable across upgrades.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct StoredUser {
    id: i64,
    email: String,
    name: String,
    role: Role,
    profile: UserProfile,
}

impl StoredUser {
    fn from_user(user: &User) -> StoredUser {
        StoredUser {
            id: user.id,
            email: user.email.clone(),
            name: user.profile.name.clone(),
            role: user.role,
            profile: user.profile.clone(),
        }
    }

    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            role: self.role,
            profile: self.profile,
        }
    }
}

#[derive(Default)]
struct SessionRecord {
    token: Option<String>,
    user: Option<User>,
}

/// Owned handle to the persisted session.
///
/// Cheap to clone; all clones share one record. The client runs on the
/// browser main thread, so the `RwLock` (required because Leptos context
/// values must be `Send + Sync`) is uncontended and never held across an
/// `await`.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionRecord>>,
}

impl SessionStore {
    /// Create a store seeded from localStorage (hydrate) or empty (SSR).
    ///
    /// A malformed or partially written user record deserializes to `None`,
    /// which later forces a fresh `/me` fetch instead of trusting it.
    pub fn load() -> SessionStore {
        let store = SessionStore::default();
        #[cfg(feature = "hydrate")]
        {
            let mut record = store.inner.write().unwrap_or_else(PoisonError::into_inner);
            record.token = read_key(TOKEN_KEY);
            record.user = read_key(USER_KEY)
                .and_then(|raw| serde_json::from_str::<StoredUser>(&raw).ok())
                .map(StoredUser::into_user);
            log::debug!(
                "session store: loaded token={} user={}",
                record.token.is_some(),
                record.user.is_some()
            );
        }
        store
    }

    /// Current session token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Replace the stored token.
    pub fn set_token(&self, token: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .token = Some(token.to_owned());
        #[cfg(feature = "hydrate")]
        write_key(TOKEN_KEY, token);
    }

    /// Most recently cached user record, if any.
    pub fn cached_user(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    /// Cache a fresh user record alongside the token.
    pub fn set_cached_user(&self, user: &User) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .user = Some(user.clone());
        #[cfg(feature = "hydrate")]
        {
            if let Ok(raw) = serde_json::to_string(&StoredUser::from_user(user)) {
                write_key(USER_KEY, &raw);
            }
        }
    }

    /// Drop the token and cached user from memory and storage.
    ///
    /// Returns `true` only when something was actually cleared, so callers
    /// can make "first clear wins" decisions: concurrent 401 responses all
    /// call this, but only one observes a transition.
    pub fn clear(&self) -> bool {
        let had_session = {
            let mut record = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            let present = record.token.is_some() || record.user.is_some();
            record.token = None;
            record.user = None;
            present
        };
        #[cfg(feature = "hydrate")]
        {
            erase_key(TOKEN_KEY);
            erase_key(USER_KEY);
        }
        had_session
    }

    /// True when both a token and a cached user are present.
    pub fn is_authenticated(&self) -> bool {
        let record = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        record.token.is_some() && record.user.is_some()
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("session store: persisting {key} failed; session is memory-only");
    }
}

#[cfg(feature = "hydrate")]
fn erase_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
