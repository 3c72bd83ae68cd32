//! Profile page: the signed-in user's record with role-aware navigation.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::authenticated_image::{AuthenticatedImage, fallback_image_url};
use crate::net::types::Role;
use crate::session::manager::SessionManager;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Role-dependent navigation entries as (path, label) pairs. Only mentees
/// browse the mentor directory.
fn nav_links(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Mentor => vec![
            ("/profile/edit", "Edit profile"),
            ("/requests", "Match requests"),
        ],
        Role::Mentee => vec![
            ("/profile/edit", "Edit profile"),
            ("/mentors", "Find mentors"),
            ("/requests", "My requests"),
        ],
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let manager = expect_context::<SessionManager>();

    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let image_path = Signal::derive(move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|user| user.profile.image_url.clone())
    });
    let fallback = Signal::derive(move || {
        let role = auth.get().user.as_ref().map_or(Role::Mentee, |user| user.role);
        fallback_image_url(role)
    });

    let on_logout = {
        let manager = manager.clone();
        let navigate = navigate.clone();
        move |_| {
            manager.logout();
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <p class="page-loading">"Loading profile..."</p> }
            >
                <div class="profile-card" id="profile">
                    <AuthenticatedImage
                        path=image_path
                        fallback=fallback
                        alt="Profile photo"
                        class="profile-photo"
                    />
                    <h2 id="profile-name">
                        {move || auth.get().user.map(|user| user.display_name().to_owned())}
                    </h2>
                    <p class="profile-email">{move || auth.get().user.map(|user| user.email)}</p>
                    <span class="profile-role">
                        {move || auth.get().user.map(|user| user.role.label())}
                    </span>
                    <Show when=move || {
                        auth.get().user.as_ref().is_some_and(|user| !user.profile.bio.is_empty())
                    }>
                        <p class="profile-bio">{move || auth.get().user.map(|user| user.profile.bio)}</p>
                    </Show>
                    <Show when=move || {
                        auth.get().user.as_ref().is_some_and(|user| user.role == Role::Mentor)
                    }>
                        <div class="profile-skills">
                            {move || {
                                auth.get().user.map(|user| {
                                    user.skills()
                                        .iter()
                                        .map(|skill| {
                                            view! { <span class="chip">{skill.clone()}</span> }
                                        })
                                        .collect_view()
                                })
                            }}
                        </div>
                    </Show>
                    <nav class="profile-nav">
                        {move || {
                            auth.get().user.map(|user| {
                                nav_links(user.role)
                                    .into_iter()
                                    .map(|(path, label)| {
                                        view! {
                                            <a class="profile-nav__link" href=path>
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </nav>
                    <button class="btn btn--logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
