use super::*;
use crate::net::types::{Role, UserProfile};

fn user() -> User {
    User {
        id: 7,
        email: "mentee@example.com".to_owned(),
        role: Role::Mentee,
        profile: UserProfile {
            name: "Lee Mentee".to_owned(),
            bio: String::new(),
            image_url: None,
            skills: None,
        },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn loading_state_is_never_signed_in_even_with_user() {
    let state = AuthState {
        user: Some(user()),
        loading: true,
    };
    assert!(!state.is_signed_in());
}

#[test]
fn resolved_state_with_user_is_signed_in() {
    let state = AuthState {
        user: Some(user()),
        loading: false,
    };
    assert!(state.is_signed_in());
    assert_eq!(state.user().map(|u| u.id), Some(7));
}

#[test]
fn resolved_state_without_user_is_signed_out() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(!state.is_signed_in());
    assert!(state.user().is_none());
}
