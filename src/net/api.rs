//! REST API client for the matching backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning a transport error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response funnels through one rejection path that reads the
//! body message and classifies the failure. A 401 on a credentialed call
//! additionally clears the session store and fires the shared
//! [`SessionInvalidations`] signal; the store reports whether anything was
//! cleared, so overlapping 401s produce exactly one notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use crate::loader::handle::ImageHandle;
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::error::{EndpointScope, classify_status, error_message_from_body};
use crate::net::types::{
    Credentials, LoginResponse, MatchRequest, MatchRequestCreate, ProfileUpdate, Registration,
    User,
};
use crate::session::store::SessionStore;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Path prefix shared by every backend endpoint.
const API_BASE: &str = "/api";

/// Build a full request path under [`API_BASE`].
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn match_request_endpoint(id: i64) -> String {
    format!("/match-requests/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn match_request_action_endpoint(id: i64, action: &str) -> String {
    format!("/match-requests/{id}/{action}")
}

/// Query pairs for the mentor directory. Empty filter values are omitted
/// entirely rather than sent as empty parameters.
#[cfg(any(test, feature = "hydrate"))]
fn mentors_query(skill: &str, order_by: &str) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !skill.is_empty() {
        pairs.push(("skill", skill.to_owned()));
    }
    if !order_by.is_empty() {
        pairs.push(("order_by", order_by.to_owned()));
    }
    pairs
}

/// First characters of a token for log lines; never the whole secret.
#[cfg(any(test, feature = "hydrate"))]
fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{prefix}...")
}

/// Shared counter that ticks once per session invalidation.
///
/// The HTTP layer only fires this signal; it performs no navigation itself.
/// A single top-level subscriber decides what invalidation means for the UI.
#[derive(Clone, Copy)]
pub struct SessionInvalidations {
    count: RwSignal<u64>,
}

impl SessionInvalidations {
    pub fn new() -> SessionInvalidations {
        SessionInvalidations {
            count: RwSignal::new(0),
        }
    }

    /// Record one invalidation event.
    pub fn notify(&self) {
        self.count.update(|n| *n += 1);
    }

    /// Reactive read: subscribers re-run whenever the count ticks.
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    pub fn count_untracked(&self) -> u64 {
        self.count.get_untracked()
    }
}

impl Default for SessionInvalidations {
    fn default() -> SessionInvalidations {
        SessionInvalidations::new()
    }
}

/// HTTP client bound to a [`SessionStore`].
///
/// Cheap to clone; clones share the same store and invalidation signal.
#[derive(Clone)]
pub struct ApiClient {
    store: SessionStore,
    invalidations: SessionInvalidations,
}

impl ApiClient {
    pub fn new(store: SessionStore, invalidations: SessionInvalidations) -> ApiClient {
        ApiClient {
            store,
            invalidations,
        }
    }

    /// `GET /health` — backend reachability probe. No token attached.
    pub async fn health(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = Request::get(&api_url("/health"))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Open).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// `POST /signup` — register a new account.
    pub async fn signup(&self, registration: &Registration) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = Request::post(&api_url("/signup"))
                .json(registration)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Open).await);
            }
            log::info!("api: signup accepted for {}", registration.email);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(server_side())
        }
    }

    /// `POST /login` — exchange credentials for a session token.
    ///
    /// A 401 here is a credential rejection, not an invalidation of some
    /// stored session, so no session-wide side effects fire.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = Request::post(&api_url("/login"))
                .json(credentials)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Open).await);
            }
            response.json::<LoginResponse>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(server_side())
        }
    }

    /// `GET /me` — fetch the authenticated user record.
    pub async fn me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorize(Request::get(&api_url("/me")))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// `PUT /profile` — update the authenticated user's profile. Returns the
    /// refreshed user record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorize(Request::put(&api_url("/profile")))
                .json(update)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            Err(server_side())
        }
    }

    /// `GET /mentors` — the mentor directory, optionally filtered by a skill
    /// substring and sorted by `name` or `skill`. Empty strings mean
    /// "no filter" / "server default order".
    pub async fn mentors(&self, skill: &str, order_by: &str) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let pairs = mentors_query(skill, order_by);
            let mut request = Request::get(&api_url("/mentors"));
            if !pairs.is_empty() {
                request = request.query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
            }
            let response = self.authorize(request).send().await.map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<Vec<User>>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (skill, order_by);
            Err(server_side())
        }
    }

    /// `POST /match-requests` — mentee asks a mentor for matching.
    pub async fn create_match_request(
        &self,
        create: &MatchRequestCreate,
    ) -> Result<MatchRequest, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorize(Request::post(&api_url("/match-requests")))
                .json(create)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<MatchRequest>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = create;
            Err(server_side())
        }
    }

    /// `GET /match-requests/incoming` — requests sent to me (mentor view).
    pub async fn incoming_match_requests(&self) -> Result<Vec<MatchRequest>, ApiError> {
        self.match_request_list("/match-requests/incoming").await
    }

    /// `GET /match-requests/outgoing` — requests I sent (mentee view).
    pub async fn outgoing_match_requests(&self) -> Result<Vec<MatchRequest>, ApiError> {
        self.match_request_list("/match-requests/outgoing").await
    }

    async fn match_request_list(&self, path: &str) -> Result<Vec<MatchRequest>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorize(Request::get(&api_url(path)))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<Vec<MatchRequest>>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(server_side())
        }
    }

    /// `PUT /match-requests/{id}/accept` — mentor accepts a pending request.
    pub async fn accept_match_request(&self, id: i64) -> Result<MatchRequest, ApiError> {
        self.match_request_action(id, "accept").await
    }

    /// `PUT /match-requests/{id}/reject` — mentor declines a pending request.
    pub async fn reject_match_request(&self, id: i64) -> Result<MatchRequest, ApiError> {
        self.match_request_action(id, "reject").await
    }

    async fn match_request_action(&self, id: i64, action: &str) -> Result<MatchRequest, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let endpoint = match_request_action_endpoint(id, action);
            let response = self
                .authorize(Request::put(&api_url(&endpoint)))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            response.json::<MatchRequest>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, action);
            Err(server_side())
        }
    }

    /// `DELETE /match-requests/{id}` — mentee withdraws their own request.
    pub async fn cancel_match_request(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let endpoint = match_request_endpoint(id);
            let response = self
                .authorize(Request::delete(&api_url(&endpoint)))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(server_side())
        }
    }

    /// Fetch a protected image (e.g. `/images/mentor/3`) with the session
    /// token attached and mint an object-URL handle from the bytes.
    pub async fn fetch_image(&self, path: &str) -> Result<ImageHandle, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self
                .authorize(Request::get(&api_url(path)))
                .send()
                .await
                .map_err(transport)?;
            if !response.ok() {
                return Err(self.reject(response, EndpointScope::Authenticated).await);
            }
            let content_type = response
                .headers()
                .get("Content-Type")
                .unwrap_or_else(|| "image/jpeg".to_owned());
            let bytes = response.binary().await.map_err(transport)?;
            crate::loader::image::handle_from_bytes(&bytes, &content_type)
                .map_err(ApiError::Transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(server_side())
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// Attach the `Authorization: Bearer` header when a token is stored.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.token() {
            Some(token) => {
                log::debug!("api: attaching token {}", token_preview(&token));
                request.header("Authorization", &format!("Bearer {token}"))
            }
            None => request,
        }
    }

    /// Classify a non-2xx response; on session-level 401, clear the store
    /// and notify the shared invalidation signal exactly once.
    async fn reject(&self, response: Response, scope: EndpointScope) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = classify_status(status, error_message_from_body(&body), scope);
        log::debug!("api: request rejected with status {status}");
        if error.is_session_invalidated() && self.store.clear() {
            log::warn!("api: 401 on a credentialed call; session cleared");
            self.invalidations.notify();
        }
        error
    }
}

#[cfg(feature = "hydrate")]
fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::Transport("not available during server rendering".to_owned())
}
