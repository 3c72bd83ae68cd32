use super::*;
use crate::net::types::{User, UserProfile};

fn user_with_role(role: Role) -> User {
    User {
        id: 3,
        email: "someone@example.com".to_owned(),
        role,
        profile: UserProfile {
            name: "Someone".to_owned(),
            bio: String::new(),
            image_url: None,
            skills: None,
        },
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn no_redirect_while_loading() {
    let state = AuthState {
        user: None,
        loading: true,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn redirect_once_loaded_without_user() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn no_redirect_with_signed_in_user() {
    let state = AuthState {
        user: Some(user_with_role(Role::Mentee)),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// should_redirect_role
// =============================================================

#[test]
fn role_redirect_waits_for_resolution() {
    let state = AuthState {
        user: Some(user_with_role(Role::Mentor)),
        loading: true,
    };
    assert!(!should_redirect_role(&state, Role::Mentee));
}

#[test]
fn matching_role_stays() {
    let state = AuthState {
        user: Some(user_with_role(Role::Mentee)),
        loading: false,
    };
    assert!(!should_redirect_role(&state, Role::Mentee));
}

#[test]
fn mismatched_role_redirects() {
    let state = AuthState {
        user: Some(user_with_role(Role::Mentor)),
        loading: false,
    };
    assert!(should_redirect_role(&state, Role::Mentee));
}

#[test]
fn signed_out_visitor_is_not_a_role_mismatch() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(!should_redirect_role(&state, Role::Mentee));
}
