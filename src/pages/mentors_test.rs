use super::*;

use crate::net::types::UserProfile;

fn mentor_with_skills(skills: Option<Vec<String>>) -> User {
    User {
        id: 9,
        email: "mentor@example.com".to_owned(),
        role: Role::Mentor,
        profile: UserProfile {
            name: "Morgan".to_owned(),
            bio: String::new(),
            image_url: None,
            skills,
        },
    }
}

// ============================================================================
// Request button label
// ============================================================================

#[test]
fn no_request_offers_matching() {
    assert_eq!(request_button_label(None), "Request matching");
}

#[test]
fn pending_request_shows_requested() {
    assert_eq!(
        request_button_label(Some(RequestStatus::Pending)),
        "Requested"
    );
}

#[test]
fn accepted_request_shows_matched() {
    assert_eq!(
        request_button_label(Some(RequestStatus::Accepted)),
        "Matched"
    );
}

#[test]
fn rejected_request_offers_retry() {
    assert_eq!(
        request_button_label(Some(RequestStatus::Rejected)),
        "Request again"
    );
}

#[test]
fn cancelled_request_offers_matching_again() {
    assert_eq!(
        request_button_label(Some(RequestStatus::Cancelled)),
        "Request matching"
    );
}

// ============================================================================
// Request button enablement
// ============================================================================

#[test]
fn button_enabled_without_a_request() {
    assert!(request_button_enabled(None));
}

#[test]
fn button_disabled_while_pending_or_accepted() {
    assert!(!request_button_enabled(Some(RequestStatus::Pending)));
    assert!(!request_button_enabled(Some(RequestStatus::Accepted)));
}

#[test]
fn button_enabled_after_rejection_or_cancellation() {
    assert!(request_button_enabled(Some(RequestStatus::Rejected)));
    assert!(request_button_enabled(Some(RequestStatus::Cancelled)));
}

// ============================================================================
// Skills line
// ============================================================================

#[test]
fn skills_line_joins_with_commas() {
    let mentor = mentor_with_skills(Some(vec!["React".to_owned(), "Vue".to_owned()]));
    assert_eq!(skills_line(&mentor), "React, Vue");
}

#[test]
fn skills_line_is_empty_without_skills() {
    let mentor = mentor_with_skills(None);
    assert_eq!(skills_line(&mentor), "");
}
