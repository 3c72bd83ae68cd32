use super::*;

#[test]
fn fallback_urls_are_public_and_role_specific() {
    assert_eq!(
        fallback_image_url(Role::Mentor),
        "https://placehold.co/500x500.jpg?text=MENTOR"
    );
    assert_eq!(
        fallback_image_url(Role::Mentee),
        "https://placehold.co/500x500.jpg?text=MENTEE"
    );
}

#[test]
fn fallback_urls_are_not_protected_paths() {
    for role in [Role::Mentor, Role::Mentee] {
        let url = fallback_image_url(role);
        assert!(url.starts_with("https://"));
        assert!(!url.starts_with("/images/"));
    }
}
