//! Modal dialog for composing a match request to a mentor.

#[cfg(test)]
#[path = "match_request_modal_test.rs"]
mod match_request_modal_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Validate the request message before submission.
pub fn validate_message(message: &str) -> Result<String, &'static str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Err("Write a short message for the mentor.")
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Dialog shown when a mentee asks a mentor for matching.
///
/// `on_submit` receives the validated message; the caller owns the actual
/// request and closes the dialog on success.
#[component]
pub fn MatchRequestModal(
    /// Mentor the request is addressed to.
    mentor: User,
    /// Disables the submit button while the request is in flight.
    sending: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let message = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let mentor_name = mentor.display_name().to_owned();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        match validate_message(&message.get()) {
            Ok(text) => {
                notice.set(String::new());
                on_submit.run(text);
            }
            Err(problem) => notice.set(problem.to_owned()),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--match-request" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Request matching with " {mentor_name}</h2>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "Message"
                        <textarea
                            class="dialog__textarea"
                            placeholder="Introduce yourself and say what you want to learn."
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                            autofocus=true
                        ></textarea>
                    </label>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="dialog__notice">{move || notice.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || sending.get()
                        >
                            {move || if sending.get() { "Sending..." } else { "Send request" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
