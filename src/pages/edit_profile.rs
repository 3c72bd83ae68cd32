//! Profile editor: text fields plus validated image selection.
//!
//! DESIGN
//! ======
//! Image intake happens entirely client-side before submit: the selected
//! file is validated (type, size, square 500-1000px) and converted to a
//! Base64 payload; the preview shows the pending data URL. Until a new
//! file is chosen, the preview is the currently stored image fetched
//! through the authenticated loader.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::authenticated_image::{AuthenticatedImage, fallback_image_url};
use crate::net::api::ApiClient;
use crate::net::types::{ProfileUpdate, Role, User};
use crate::session::manager::SessionManager;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Split a comma-separated skills field into a cleaned list. Duplicates
/// (case-insensitive) and empty entries are dropped, order is preserved.
fn parse_skills(input: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let skill = raw.trim();
        if skill.is_empty() {
            continue;
        }
        if skills.iter().any(|known| known.eq_ignore_ascii_case(skill)) {
            continue;
        }
        skills.push(skill.to_owned());
    }
    skills
}

/// The only hard requirement on the text fields.
fn validate_profile_form(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        Err("Enter a display name.")
    } else {
        Ok(())
    }
}

/// Assemble the update payload. Skills are only attached for mentors;
/// `image` is `None` when the stored picture should be kept.
fn build_profile_update(
    user: &User,
    name: &str,
    bio: &str,
    skills_input: &str,
    image: Option<String>,
) -> ProfileUpdate {
    ProfileUpdate {
        id: user.id,
        name: name.trim().to_owned(),
        role: user.role,
        bio: bio.trim().to_owned(),
        image,
        skills: match user.role {
            Role::Mentor => Some(parse_skills(skills_input)),
            Role::Mentee => None,
        },
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let manager = expect_context::<SessionManager>();

    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let skills_input = RwSignal::new(String::new());
    let selected_base64 = RwSignal::new(None::<String>);
    let preview_data_url = RwSignal::new(None::<String>);
    let image_problem = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Seed the form from the current record; re-runs if the record is
    // republished (e.g. after a save).
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            name.set(user.profile.name.clone());
            bio.set(user.profile.bio.clone());
            skills_input.set(user.skills().join(", "));
        }
    });

    let is_mentor =
        move || auth.get().user.as_ref().is_some_and(|user| user.role == Role::Mentor);

    let stored_image_path = Signal::derive(move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|user| user.profile.image_url.clone())
    });
    let fallback = Signal::derive(move || {
        let role = auth.get().user.as_ref().map_or(Role::Mentee, |user| user.role);
        fallback_image_url(role)
    });

    let on_file_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                image_problem.set(String::new());
                leptos::task::spawn_local(async move {
                    match crate::util::image::intake_profile_image(&file).await {
                        Ok(selected) => {
                            preview_data_url.set(Some(selected.data_url));
                            selected_base64.set(Some(selected.base64));
                        }
                        Err(problem) => {
                            image_problem.set(problem.to_owned());
                            preview_data_url.set(None);
                            selected_base64.set(None);
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            return;
        };
        if let Err(problem) = validate_profile_form(&name.get()) {
            notice.set(problem.to_owned());
            return;
        }
        let update = build_profile_update(
            &user,
            &name.get(),
            &bio.get(),
            &skills_input.get(),
            selected_base64.get(),
        );
        saving.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let manager = manager.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.update_profile(&update).await {
                    Ok(updated) => {
                        manager.adopt_user_record(&updated);
                        selected_base64.set(None);
                        preview_data_url.set(None);
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(error) => notice.set(error.to_string()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &manager, &navigate, update);
        }
    };

    view! {
        <div class="edit-profile-page">
            <div class="edit-profile-card">
                <h1>"Edit profile"</h1>
                <div class="edit-profile-preview">
                    <Show
                        when=move || preview_data_url.get().is_some()
                        fallback=move || {
                            view! {
                                <AuthenticatedImage
                                    path=stored_image_path
                                    fallback=fallback
                                    alt="Current profile photo"
                                    class="profile-photo"
                                />
                            }
                        }
                    >
                        <img
                            class="profile-photo profile-photo--pending"
                            src=move || preview_data_url.get().unwrap_or_default()
                            alt="Selected profile photo"
                        />
                    </Show>
                </div>
                <form class="edit-profile-form" on:submit=on_submit>
                    <label class="form-label">
                        "Name"
                        <input
                            id="name"
                            class="form-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Bio"
                        <textarea
                            id="bio"
                            class="form-textarea"
                            placeholder="Tell people about yourself."
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=is_mentor>
                        <label class="form-label">
                            "Skills (comma-separated)"
                            <input
                                id="skillsets"
                                class="form-input"
                                type="text"
                                placeholder="Rust, PostgreSQL, systems design"
                                prop:value=move || skills_input.get()
                                on:input=move |ev| skills_input.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="form-label">
                        "Profile photo (.jpg or .png, square, 500-1000px, up to 1 MB)"
                        <input
                            id="profile-photo"
                            class="form-input form-input--file"
                            type="file"
                            accept=".jpg,.jpeg,.png"
                            on:change=on_file_change
                        />
                    </label>
                    <Show when=move || !image_problem.get().is_empty()>
                        <p class="form-message form-message--error">{move || image_problem.get()}</p>
                    </Show>
                    <div class="edit-profile-actions">
                        <a class="btn" href="/profile">
                            "Cancel"
                        </a>
                        <button id="save" class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="form-message form-message--error">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
