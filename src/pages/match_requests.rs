//! Match-request inbox: incoming decisions for mentors, sent requests
//! for mentees.
//!
//! DESIGN
//! ======
//! Both roles share one page; the viewer's role picks the endpoint and
//! the actions each row offers. Accept and reject install the record the
//! server returns, and a cancelled request is removed locally, so no
//! refetch is needed after an action. The request payloads carry bare
//! user ids; mentor names are resolved through the directory listing and
//! everything else falls back to a placeholder identity.

#[cfg(test)]
#[path = "match_requests_test.rs"]
mod match_requests_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::{MatchRequest, RequestStatus, Role};
use crate::state::auth::AuthState;
use crate::state::requests::{
    CounterpartyCache, CounterpartyIdentity, counterparty_id, counterparty_role,
};
use crate::util::auth::install_unauth_redirect;

fn page_title(viewer: Role) -> &'static str {
    match viewer {
        Role::Mentor => "Incoming match requests",
        Role::Mentee => "My match requests",
    }
}

fn empty_message(viewer: Role) -> &'static str {
    match viewer {
        Role::Mentor => "No incoming requests yet.",
        Role::Mentee => "You have not sent any requests yet.",
    }
}

fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "status-badge status-badge--pending",
        RequestStatus::Accepted => "status-badge status-badge--accepted",
        RequestStatus::Rejected => "status-badge status-badge--rejected",
        RequestStatus::Cancelled => "status-badge status-badge--cancelled",
    }
}

/// Mentors decide pending requests; settled ones are read-only.
fn shows_decision_buttons(viewer: Role, status: RequestStatus) -> bool {
    viewer == Role::Mentor && status.is_pending()
}

/// Mentees may withdraw a request only while it is still pending.
fn shows_cancel_button(viewer: Role, status: RequestStatus) -> bool {
    viewer == Role::Mentee && status.is_pending()
}

#[component]
pub fn MatchRequestsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let requests = RwSignal::new(Vec::<MatchRequest>::new());
    let counterparties = RwSignal::new(CounterpartyCache::default());
    let list_loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());
    let processing_id = RwSignal::new(None::<i64>);
    let cancel_target = RwSignal::new(None::<i64>);

    let viewer_role = Signal::derive(move || auth.get().user.map(|user| user.role));

    #[cfg(feature = "hydrate")]
    {
        // Fetch the role-appropriate list once the session is resolved.
        let load_api = api.clone();
        Effect::new(move || {
            let Some(user) = auth.get().user else {
                return;
            };
            let role = user.role;
            let api = load_api.clone();
            leptos::task::spawn_local(async move {
                list_loading.set(true);
                let result = match role {
                    Role::Mentor => api.incoming_match_requests().await,
                    Role::Mentee => api.outgoing_match_requests().await,
                };
                match result {
                    Ok(list) => {
                        requests.set(list);
                        notice.set(String::new());
                    }
                    Err(error) => notice.set(format!("Could not load match requests: {error}")),
                }
                list_loading.set(false);

                // Mentees see mentor counterparties; the directory listing
                // is the only place their names come from.
                if role == Role::Mentee {
                    match api.mentors("", "").await {
                        Ok(mentors) => counterparties
                            .update(|cache| cache.populate_from_mentors(&mentors)),
                        Err(error) => {
                            log::warn!("match requests: mentor name lookup failed: {error}");
                        }
                    }
                }
            });
        });
    }

    let on_decide = Callback::new({
        let api = api.clone();
        move |(id, accept): (i64, bool)| {
            if processing_id.get_untracked().is_some() {
                return;
            }
            processing_id.set(Some(id));

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = if accept {
                        api.accept_match_request(id).await
                    } else {
                        api.reject_match_request(id).await
                    };
                    match result {
                        Ok(updated) => {
                            requests.update(|list| {
                                if let Some(slot) =
                                    list.iter_mut().find(|request| request.id == updated.id)
                                {
                                    *slot = updated;
                                }
                            });
                            notice.set(String::new());
                        }
                        Err(error) => notice.set(format!("Could not update the request: {error}")),
                    }
                    processing_id.set(None);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, accept);
                processing_id.set(None);
            }
        }
    });

    let on_request_cancel = Callback::new(move |id: i64| cancel_target.set(Some(id)));
    let on_dialog_dismiss = Callback::new(move |()| cancel_target.set(None));
    let on_cancel_confirmed = Callback::new({
        let api = api.clone();
        move |id: i64| {
            if processing_id.get_untracked().is_some() {
                return;
            }
            processing_id.set(Some(id));

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.cancel_match_request(id).await {
                        Ok(()) => {
                            requests.update(|list| list.retain(|request| request.id != id));
                            notice.set(String::new());
                        }
                        Err(error) => notice.set(format!("Could not cancel the request: {error}")),
                    }
                    processing_id.set(None);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
                processing_id.set(None);
            }
        }
    });

    view! {
        <div class="requests-page">
            <header class="requests-page__header">
                <h1>{move || viewer_role.get().map_or("Match requests", page_title)}</h1>
                <a class="back-link" href="/profile">
                    "Back to profile"
                </a>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="page-message page-message--error">{move || notice.get()}</p>
            </Show>
            <Show
                when=move || !list_loading.get()
                fallback=move || view! { <p class="page-loading">"Loading match requests..."</p> }
            >
                <Show when=move || requests.get().is_empty()>
                    <p class="page-empty">
                        {move || viewer_role.get().map_or("No requests.", empty_message)}
                    </p>
                </Show>
                <div class="request-list">
                    {move || {
                        let Some(role) = viewer_role.get() else {
                            return Vec::new();
                        };
                        let mut cache = counterparties.get();
                        let busy_id = processing_id.get();
                        requests
                            .get()
                            .into_iter()
                            .map(|request| {
                                let other = cache
                                    .identity(counterparty_id(&request, role), counterparty_role(role));
                                let busy = busy_id == Some(request.id);
                                view! {
                                    <RequestRow
                                        request=request
                                        counterparty=other
                                        viewer_role=role
                                        busy=busy
                                        on_decide=on_decide
                                        on_cancel_request=on_request_cancel
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || cancel_target.get().is_some()>
                <CancelRequestDialog
                    request_id=cancel_target
                    on_cancel=on_dialog_dismiss
                    on_confirm=on_cancel_confirmed
                />
            </Show>
        </div>
    }
}

/// One request in the list, with the actions the viewer's role allows.
#[component]
fn RequestRow(
    request: MatchRequest,
    counterparty: CounterpartyIdentity,
    viewer_role: Role,
    busy: bool,
    on_decide: Callback<(i64, bool)>,
    on_cancel_request: Callback<i64>,
) -> impl IntoView {
    let request_id = request.id;
    let status = request.status;
    let message = request.message.clone().filter(|text| !text.is_empty());

    view! {
        <div class="request-card">
            <div class="request-card__header">
                <span class="request-card__name">{counterparty.name}</span>
                <span class=status_badge_class(status)>{status.label()}</span>
            </div>
            {message.map(|text| view! { <p class="request-card__message">{text}</p> })}
            {shows_decision_buttons(viewer_role, status)
                .then(|| {
                    view! {
                        <div class="request-card__actions">
                            <button
                                class="btn btn--primary"
                                disabled=busy
                                on:click=move |_| on_decide.run((request_id, true))
                            >
                                "Accept"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=busy
                                on:click=move |_| on_decide.run((request_id, false))
                            >
                                "Reject"
                            </button>
                        </div>
                    }
                })}
            {shows_cancel_button(viewer_role, status)
                .then(|| {
                    view! {
                        <div class="request-card__actions">
                            <button
                                class="btn"
                                disabled=busy
                                on:click=move |_| on_cancel_request.run(request_id)
                            >
                                "Cancel request"
                            </button>
                        </div>
                    }
                })}
        </div>
    }
}

/// Confirmation dialog shown before withdrawing a request.
#[component]
fn CancelRequestDialog(
    request_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<i64>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = request_id.get_untracked() else {
            return;
        };
        on_confirm.run(id);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Cancel request"</h2>
                <p class="dialog__danger">"This will withdraw your match request to the mentor."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Keep request"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Cancel request"
                    </button>
                </div>
            </div>
        </div>
    }
}
