//! Signup page: account form with role selection.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::session::manager::{SessionManager, SignupInput};

#[component]
pub fn SignupPage() -> impl IntoView {
    let manager = expect_context::<SessionManager>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let role_value = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = SignupInput {
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            name: name.get(),
            role: Role::parse(&role_value.get()),
        };
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match manager.signup(&input).await {
                    Ok(()) => {
                        navigate("/login?registered=1", NavigateOptions::default());
                    }
                    Err(error) => {
                        notice.set(error.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, &navigate, input);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"MentorMatch"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        placeholder="Display name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        id="confirm-password"
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        required=true
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <select
                        id="role"
                        class="auth-input auth-input--select"
                        prop:value=move || role_value.get()
                        on:change=move |ev| role_value.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a role..."</option>
                        <option value="mentor">"Mentor"</option>
                        <option value="mentee">"Mentee"</option>
                    </select>
                    <button id="signup" class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || notice.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
