//! Mentor directory: skill filter, ordering, and match requests.
//!
//! DESIGN
//! ======
//! Filtering and ordering are server-side; the page just re-queries when
//! the selection changes. Keystrokes are debounced, and a response only
//! lands if its query is still the latest, so a slow earlier response can
//! never overwrite a newer one.

#[cfg(test)]
#[path = "mentors_test.rs"]
mod mentors_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::authenticated_image::{AuthenticatedImage, fallback_image_url};
use crate::components::match_request_modal::MatchRequestModal;
use crate::net::api::ApiClient;
use crate::net::types::{MatchRequest, MatchRequestCreate, RequestStatus, Role, User};
use crate::state::auth::AuthState;
use crate::state::mentors::{MentorOrder, MentorQuery};
use crate::state::requests::outgoing_status_for;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};

/// Label for the per-mentor action button given the outgoing request state.
fn request_button_label(status: Option<RequestStatus>) -> &'static str {
    match status {
        None | Some(RequestStatus::Cancelled) => "Request matching",
        Some(RequestStatus::Pending) => "Requested",
        Some(RequestStatus::Accepted) => "Matched",
        Some(RequestStatus::Rejected) => "Request again",
    }
}

/// Pending and accepted requests block further requests to that mentor;
/// rejected or cancelled ones may be retried.
fn request_button_enabled(status: Option<RequestStatus>) -> bool {
    matches!(
        status,
        None | Some(RequestStatus::Rejected) | Some(RequestStatus::Cancelled)
    )
}

/// One line summarizing a mentor's skills.
fn skills_line(user: &User) -> String {
    user.skills().join(", ")
}

#[component]
pub fn MentorsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    // Only mentees browse the directory.
    install_role_redirect(auth, Role::Mentee, navigate.clone());

    let query = RwSignal::new(MentorQuery::default());
    let mentors = RwSignal::new(Vec::<User>::new());
    let outgoing = RwSignal::new(Vec::<MatchRequest>::new());
    let list_loading = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let selected_mentor = RwSignal::new(None::<User>);
    let sending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        // Directory query, re-run on every filter/order change.
        let debounce = RwSignal::new(0_u64);
        let query_api = api.clone();
        Effect::new(move || {
            let current_query = query.get();
            let my_turn = debounce.get_untracked() + 1;
            debounce.set(my_turn);
            let api = query_api.clone();
            leptos::task::spawn_local(async move {
                // Let fast keystrokes coalesce before hitting the server.
                gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
                if debounce.get_untracked() != my_turn {
                    return;
                }
                list_loading.set(true);
                let result = api
                    .mentors(&current_query.skill_param(), current_query.order.as_param())
                    .await;
                if debounce.get_untracked() == my_turn {
                    match result {
                        Ok(list) => {
                            mentors.set(list);
                            notice.set(String::new());
                        }
                        Err(error) => notice.set(format!("Could not load mentors: {error}")),
                    }
                    list_loading.set(false);
                }
            });
        });

        // Existing outgoing requests drive the per-mentor button states.
        let outgoing_api = api.clone();
        leptos::task::spawn_local(async move {
            match outgoing_api.outgoing_match_requests().await {
                Ok(list) => outgoing.set(list),
                Err(error) => log::warn!("mentors: loading outgoing requests failed: {error}"),
            }
        });
    }

    let on_cancel_modal = Callback::new(move |()| selected_mentor.set(None));
    let on_open_modal = Callback::new(move |mentor: User| {
        selected_mentor.set(Some(mentor));
    });
    let on_submit_request = Callback::new({
        let api = api.clone();
        move |message: String| {
            let Some(mentor) = selected_mentor.get_untracked() else {
                return;
            };
            let Some(me) = auth.get_untracked().user else {
                return;
            };
            let create = MatchRequestCreate {
                mentor_id: mentor.id,
                mentee_id: me.id,
                message,
            };
            sending.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.create_match_request(&create).await {
                        Ok(request) => {
                            outgoing.update(|list| list.push(request));
                            notice.set(String::new());
                        }
                        Err(error) => notice.set(format!("Could not send the request: {error}")),
                    }
                    selected_mentor.set(None);
                    sending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, create);
                sending.set(false);
            }
        }
    });

    view! {
        <div class="mentors-page">
            <h1>"Find mentors"</h1>
            <div class="mentor-filters">
                <input
                    id="search"
                    class="form-input"
                    type="search"
                    placeholder="Filter by skill"
                    prop:value=move || query.get().skill
                    on:input=move |ev| query.update(|q| q.skill = event_target_value(&ev))
                />
                <select
                    id="order"
                    class="form-input form-input--select"
                    on:change=move |ev| {
                        query.update(|q| q.order = MentorOrder::parse(&event_target_value(&ev)));
                    }
                >
                    <option value="">"Default order"</option>
                    <option value="name">"By name"</option>
                    <option value="skill">"By skill"</option>
                </select>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="page-message page-message--error">{move || notice.get()}</p>
            </Show>
            <Show when=move || list_loading.get()>
                <p class="page-loading">"Loading mentors..."</p>
            </Show>
            <Show when=move || !list_loading.get() && mentors.get().is_empty()>
                <p class="page-empty">"No mentors match the current filter."</p>
            </Show>
            <div class="mentor-grid">
                {move || {
                    let requests = outgoing.get();
                    mentors
                        .get()
                        .into_iter()
                        .map(|mentor| {
                            let status = outgoing_status_for(&requests, mentor.id);
                            view! {
                                <MentorCard mentor=mentor status=status on_request=on_open_modal/>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || {
                selected_mentor.get().map(|mentor| {
                    view! {
                        <MatchRequestModal
                            mentor=mentor
                            sending=sending
                            on_cancel=on_cancel_modal
                            on_submit=on_submit_request
                        />
                    }
                })
            }}
        </div>
    }
}

/// One mentor in the directory grid.
#[component]
fn MentorCard(
    mentor: User,
    status: Option<RequestStatus>,
    on_request: Callback<User>,
) -> impl IntoView {
    let role = mentor.role;
    let image_path = mentor.profile.image_url.clone();
    let name = mentor.display_name().to_owned();
    let bio = mentor.profile.bio.clone();
    let skills = skills_line(&mentor);

    view! {
        <div class="mentor-card mentor">
            <AuthenticatedImage
                path=Signal::derive(move || image_path.clone())
                fallback=Signal::derive(move || fallback_image_url(role))
                alt="Mentor photo"
                class="mentor-card__photo"
            />
            <h3 class="mentor-card__name">{name}</h3>
            {(!bio.is_empty()).then(|| view! { <p class="mentor-card__bio">{bio}</p> })}
            {(!skills.is_empty()).then(|| view! { <p class="mentor-card__skills">{skills}</p> })}
            <button
                class="btn btn--primary mentor-card__request"
                disabled=!request_button_enabled(status)
                on:click=move |_| on_request.run(mentor.clone())
            >
                {request_button_label(status)}
            </button>
        </div>
    }
}
