//! Login page: credential form plus post-signup notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::session::manager::SessionManager;
use crate::state::auth::AuthState;

/// Validate the login form. Whitespace around the email is ignored;
/// passwords are taken verbatim.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let manager = expect_context::<SessionManager>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Freshly registered accounts arrive here with `?registered=1`.
    let query = use_query_map();
    let registered = Memo::new(move |_| query.with(|map| map.get("registered").is_some()));

    // Already signed in (or login just finished): go to the profile.
    let navigate = use_navigate();
    Effect::new(move || {
        if auth.get().is_signed_in() {
            navigate("/profile", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(problem) => {
                notice.set(problem.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                // On success the auth effect above performs the redirect.
                if let Err(error) = manager.login(&credentials).await {
                    notice.set(error.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&manager, credentials);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"MentorMatch"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <Show when=move || registered.get()>
                    <p class="auth-message auth-message--info">
                        "Account created. Sign in to continue."
                    </p>
                </Show>
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
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button id="login" class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || notice.get()}</p>
                </Show>
                <p class="auth-switch">
                    "No account yet? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
