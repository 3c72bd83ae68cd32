use super::*;

#[test]
fn order_params_match_backend_values() {
    assert_eq!(MentorOrder::Unsorted.as_param(), "");
    assert_eq!(MentorOrder::Name.as_param(), "name");
    assert_eq!(MentorOrder::Skill.as_param(), "skill");
}

#[test]
fn order_parse_round_trips_and_defaults() {
    assert_eq!(MentorOrder::parse("name"), MentorOrder::Name);
    assert_eq!(MentorOrder::parse("skill"), MentorOrder::Skill);
    assert_eq!(MentorOrder::parse(""), MentorOrder::Unsorted);
    assert_eq!(MentorOrder::parse("bogus"), MentorOrder::Unsorted);
}

#[test]
fn default_query_has_no_filter() {
    let query = MentorQuery::default();
    assert_eq!(query.skill_param(), "");
    assert_eq!(query.order, MentorOrder::Unsorted);
}

#[test]
fn skill_param_trims_whitespace() {
    let query = MentorQuery {
        skill: "  react native  ".to_owned(),
        order: MentorOrder::Name,
    };
    assert_eq!(query.skill_param(), "react native");
}
