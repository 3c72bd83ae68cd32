use super::*;

fn sample_user() -> User {
    User {
        id: 3,
        email: "mentor@example.com".to_owned(),
        role: Role::Mentor,
        profile: UserProfile {
            name: "Kim Mentor".to_owned(),
            bio: "Backend engineer".to_owned(),
            image_url: Some("/images/mentor/3".to_owned()),
            skills: Some(vec!["Rust".to_owned()]),
        },
    }
}

// =============================================================
// In-memory mirror behavior (storage writes are hydrate-only)
// =============================================================

#[test]
fn fresh_store_has_no_session() {
    let store = SessionStore::default();
    assert!(store.token().is_none());
    assert!(store.cached_user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn set_token_then_user_is_authenticated() {
    let store = SessionStore::default();
    store.set_token("tok-123");
    assert!(!store.is_authenticated(), "token alone is not a session");
    store.set_cached_user(&sample_user());
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("tok-123"));
    assert_eq!(store.cached_user().map(|u| u.id), Some(3));
}

#[test]
fn clones_share_one_record() {
    let store = SessionStore::default();
    let alias = store.clone();
    store.set_token("tok-shared");
    assert_eq!(alias.token().as_deref(), Some("tok-shared"));
    alias.clear();
    assert!(store.token().is_none());
}

#[test]
fn set_token_replaces_previous_value() {
    let store = SessionStore::default();
    store.set_token("first");
    store.set_token("second");
    assert_eq!(store.token().as_deref(), Some("second"));
}

// =============================================================
// clear: idempotent, reports whether anything was present
// =============================================================

#[test]
fn clear_reports_presence_exactly_once() {
    let store = SessionStore::default();
    store.set_token("tok-123");
    store.set_cached_user(&sample_user());

    assert!(store.clear(), "first clear sees the session");
    assert!(!store.clear(), "second clear finds nothing");
    assert!(store.token().is_none());
    assert!(store.cached_user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn clear_on_empty_store_reports_false() {
    let store = SessionStore::default();
    assert!(!store.clear());
}

#[test]
fn clear_with_only_token_still_reports_true() {
    let store = SessionStore::default();
    store.set_token("tok-orphan");
    assert!(store.clear());
}

// =============================================================
// StoredUser persistence shape
// =============================================================

#[test]
fn stored_user_round_trips_through_json() {
    let user = sample_user();
    let stored = StoredUser::from_user(&user);
    let raw = serde_json::to_string(&stored).unwrap();
    let back: StoredUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back.into_user(), user);
}

#[test]
fn stored_user_duplicates_profile_name_at_top_level() {
    let stored = StoredUser::from_user(&sample_user());
    let raw = serde_json::to_string(&stored).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Kim Mentor"));
    assert_eq!(
        value.pointer("/profile/name").and_then(|v| v.as_str()),
        Some("Kim Mentor")
    );
    assert_eq!(
        value.pointer("/profile/imageUrl").and_then(|v| v.as_str()),
        Some("/images/mentor/3")
    );
}

#[test]
fn malformed_stored_user_fails_to_parse() {
    // Simulates a partial or legacy record: deserialization must fail
    // (forcing a fresh /me fetch) rather than produce a half-empty user.
    let raw = r#"{"id": 3, "email": "mentor@example.com"}"#;
    assert!(serde_json::from_str::<StoredUser>(raw).is_err());
}
