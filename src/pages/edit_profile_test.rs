use super::*;
use crate::net::types::UserProfile;

fn user(role: Role) -> User {
    User {
        id: 3,
        email: "someone@example.com".to_owned(),
        role,
        profile: UserProfile {
            name: "Someone".to_owned(),
            bio: "old bio".to_owned(),
            image_url: None,
            skills: Some(vec!["Rust".to_owned()]),
        },
    }
}

// =============================================================
// parse_skills
// =============================================================

#[test]
fn skills_are_split_and_trimmed() {
    assert_eq!(
        parse_skills(" Rust , PostgreSQL,systems design "),
        vec!["Rust".to_owned(), "PostgreSQL".to_owned(), "systems design".to_owned()]
    );
}

#[test]
fn empty_entries_are_dropped() {
    assert_eq!(parse_skills("Rust,,  ,Go"), vec!["Rust".to_owned(), "Go".to_owned()]);
    assert!(parse_skills("").is_empty());
    assert!(parse_skills(" , ,").is_empty());
}

#[test]
fn duplicate_skills_keep_first_spelling() {
    assert_eq!(
        parse_skills("Rust, rust, RUST, Go"),
        vec!["Rust".to_owned(), "Go".to_owned()]
    );
}

// =============================================================
// validate_profile_form
// =============================================================

#[test]
fn name_is_required() {
    assert_eq!(validate_profile_form("   "), Err("Enter a display name."));
    assert!(validate_profile_form("Someone").is_ok());
}

// =============================================================
// build_profile_update
// =============================================================

#[test]
fn mentor_update_carries_parsed_skills() {
    let update = build_profile_update(
        &user(Role::Mentor),
        "  New Name ",
        " new bio ",
        "Rust, Go",
        None,
    );
    assert_eq!(update.id, 3);
    assert_eq!(update.name, "New Name");
    assert_eq!(update.bio, "new bio");
    assert_eq!(update.role, Role::Mentor);
    assert_eq!(update.skills, Some(vec!["Rust".to_owned(), "Go".to_owned()]));
    assert!(update.image.is_none());
}

#[test]
fn mentee_update_never_sends_skills() {
    let update = build_profile_update(&user(Role::Mentee), "Name", "", "Rust, Go", None);
    assert!(update.skills.is_none());
}

#[test]
fn selected_image_rides_along_as_base64() {
    let update = build_profile_update(
        &user(Role::Mentee),
        "Name",
        "bio",
        "",
        Some("aGVsbG8=".to_owned()),
    );
    assert_eq!(update.image.as_deref(), Some("aGVsbG8="));
}
