use super::*;

#[test]
fn mentee_links_include_the_mentor_directory() {
    let links = nav_links(Role::Mentee);
    assert_eq!(
        links,
        vec![
            ("/profile/edit", "Edit profile"),
            ("/mentors", "Find mentors"),
            ("/requests", "My requests"),
        ]
    );
}

#[test]
fn mentor_links_skip_the_mentor_directory() {
    let links = nav_links(Role::Mentor);
    assert!(links.iter().all(|(path, _)| *path != "/mentors"));
    assert!(links.contains(&("/requests", "Match requests")));
    assert!(links.contains(&("/profile/edit", "Edit profile")));
}
