//! Root application component with routing, session wiring, and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::api::{ApiClient, SessionInvalidations};
use crate::pages::{
    edit_profile::EditProfilePage, login::LoginPage, match_requests::MatchRequestsPage,
    mentors::MentorsPage, profile::ProfilePage, signup::SignupPage,
};
use crate::session::manager::SessionManager;
use crate::session::store::SessionStore;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wires the session layer together and provides it as context: one
/// token store, one API client, one manager publishing `AuthState`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::load();
    let invalidations = SessionInvalidations::new();
    let api = ApiClient::new(store.clone(), invalidations);
    let auth = RwSignal::new(AuthState::default());
    let manager = SessionManager::new(store, api.clone(), auth);

    provide_context(auth);
    provide_context(invalidations);
    provide_context(api.clone());
    provide_context(manager.clone());

    // Resolve any stored session before the route guards act on it.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            manager.initialize().await;
        });
        leptos::task::spawn_local(async move {
            if let Err(error) = api.health().await {
                log::warn!("health probe failed: {error}");
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/mentormatch.css"/>
        <Title text="MentorMatch"/>

        <Router>
            <SessionExpiryWatcher/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("profile"), StaticSegment("edit")) view=EditProfilePage/>
                <Route path=StaticSegment("mentors") view=MentorsPage/>
                <Route path=StaticSegment("requests") view=MatchRequestsPage/>
            </Routes>
        </Router>
    }
}

/// Landing route: forwards to the profile or the login form once the
/// stored session is resolved.
#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.user.is_some() { "/profile" } else { "/login" };
        navigate(target, NavigateOptions::default());
    });

    view! { <p class="boot-message">"Loading MentorMatch..."</p> }
}

/// Reacts to a session invalidation raised by the HTTP layer: clears the
/// published auth state and sends the visitor back to the login form.
#[component]
fn SessionExpiryWatcher() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let invalidations = expect_context::<SessionInvalidations>();
    let navigate = use_navigate();

    Effect::new(move || {
        if invalidations.count() == 0 {
            return;
        }
        auth.update(|state| {
            state.user = None;
            state.loading = false;
        });
        navigate("/login", NavigateOptions::default());
    });
}
