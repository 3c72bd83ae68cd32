//! `<img>` wrapper that fetches protected images with the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile images live behind credentialed endpoints, so the browser's own
//! image loader cannot fetch them. This component pulls the bytes through
//! the API client, displays them via an object URL, and manages that URL's
//! lifetime: the previous URL is revoked when a new one installs, stale
//! responses are revoked on arrival, and unmount releases whatever is
//! installed. Only the newest request for a given element may win.

#[cfg(test)]
#[path = "authenticated_image_test.rs"]
mod authenticated_image_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "hydrate")]
use crate::loader::handle::ImageHandle;
#[cfg(feature = "hydrate")]
use crate::loader::image::{self, LoadSequence};
#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::net::types::Role;

/// Placeholder art for users without an uploaded image. Public URL, no
/// token involved.
pub fn fallback_image_url(role: Role) -> String {
    match role {
        Role::Mentor => "https://placehold.co/500x500.jpg?text=MENTOR".to_owned(),
        Role::Mentee => "https://placehold.co/500x500.jpg?text=MENTEE".to_owned(),
    }
}

/// Image element backed by an authenticated fetch.
///
/// While `path` is `None` (or a fetch fails) the fallback URL is shown.
/// Every `path` change supersedes any fetch still in flight.
#[component]
pub fn AuthenticatedImage(
    /// Protected server path such as `/images/mentor/3`.
    #[prop(into)] path: Signal<Option<String>>,
    /// Public URL to show when no protected image is available.
    #[prop(into)] fallback: Signal<String>,
    /// Alt text for the rendered `<img>`.
    #[prop(into, optional)] alt: String,
    /// Additional CSS class on the `<img>`.
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let src = RwSignal::new(fallback.get_untracked());
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<ApiClient>();
        let sequence = Arc::new(Mutex::new(LoadSequence::default()));
        let slot = Arc::new(Mutex::new(None::<ImageHandle>));

        {
            let sequence = Arc::clone(&sequence);
            let slot = Arc::clone(&slot);
            Effect::new(move || {
                let target = path.get().filter(|p| !p.is_empty());
                let fallback_url = fallback.get();
                let generation = lock(&sequence).begin();

                let Some(target) = target else {
                    image::release(&mut lock(&slot));
                    src.set(fallback_url);
                    loading.set(false);
                    return;
                };

                loading.set(true);
                let api = api.clone();
                let sequence = Arc::clone(&sequence);
                let slot = Arc::clone(&slot);
                leptos::task::spawn_local(async move {
                    match api.fetch_image(&target).await {
                        Ok(handle) => {
                            let outcome = image::settle(
                                &lock(&sequence),
                                generation,
                                handle,
                                &mut lock(&slot),
                            );
                            if outcome.was_installed() {
                                let url =
                                    lock(&slot).as_ref().map(|live| live.url().to_owned());
                                if let Some(url) = url {
                                    src.set(url);
                                }
                                loading.set(false);
                            }
                            // A stale arrival changes nothing on screen.
                        }
                        Err(error) => {
                            if lock(&sequence).is_current(generation) {
                                log::warn!("authenticated image: {target} failed: {error}");
                                image::release(&mut lock(&slot));
                                src.set(fallback_url);
                                loading.set(false);
                            }
                        }
                    }
                });
            });
        }

        on_cleanup(move || {
            lock(&sequence).detach();
            image::release(&mut lock(&slot));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }

    let class_attr = move || {
        if class.is_empty() {
            "auth-image".to_owned()
        } else {
            format!("auth-image {class}")
        }
    };

    view! {
        <img
            class=class_attr
            class:auth-image--loading=move || loading.get()
            src=move || src.get()
            alt=alt
        />
    }
}
