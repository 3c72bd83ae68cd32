use super::*;

// ============================================================================
// Titles and empty states
// ============================================================================

#[test]
fn mentors_see_the_incoming_title() {
    assert_eq!(page_title(Role::Mentor), "Incoming match requests");
}

#[test]
fn mentees_see_the_sent_title() {
    assert_eq!(page_title(Role::Mentee), "My match requests");
}

#[test]
fn empty_messages_are_role_specific() {
    assert_eq!(empty_message(Role::Mentor), "No incoming requests yet.");
    assert_eq!(
        empty_message(Role::Mentee),
        "You have not sent any requests yet."
    );
}

// ============================================================================
// Status badge
// ============================================================================

#[test]
fn badge_class_tracks_status() {
    assert_eq!(
        status_badge_class(RequestStatus::Pending),
        "status-badge status-badge--pending"
    );
    assert_eq!(
        status_badge_class(RequestStatus::Accepted),
        "status-badge status-badge--accepted"
    );
    assert_eq!(
        status_badge_class(RequestStatus::Rejected),
        "status-badge status-badge--rejected"
    );
    assert_eq!(
        status_badge_class(RequestStatus::Cancelled),
        "status-badge status-badge--cancelled"
    );
}

// ============================================================================
// Row actions by role and status
// ============================================================================

#[test]
fn mentors_decide_only_pending_requests() {
    assert!(shows_decision_buttons(Role::Mentor, RequestStatus::Pending));
    assert!(!shows_decision_buttons(Role::Mentor, RequestStatus::Accepted));
    assert!(!shows_decision_buttons(Role::Mentor, RequestStatus::Rejected));
    assert!(!shows_decision_buttons(Role::Mentor, RequestStatus::Cancelled));
}

#[test]
fn mentees_never_see_decision_buttons() {
    assert!(!shows_decision_buttons(Role::Mentee, RequestStatus::Pending));
}

#[test]
fn mentees_cancel_only_pending_requests() {
    assert!(shows_cancel_button(Role::Mentee, RequestStatus::Pending));
    assert!(!shows_cancel_button(Role::Mentee, RequestStatus::Accepted));
    assert!(!shows_cancel_button(Role::Mentee, RequestStatus::Rejected));
}

#[test]
fn mentors_never_see_the_cancel_button() {
    assert!(!shows_cancel_button(Role::Mentor, RequestStatus::Pending));
}
