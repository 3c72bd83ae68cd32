use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn api_url_prefixes_base_path() {
    assert_eq!(api_url("/login"), "/api/login");
    assert_eq!(api_url("/images/mentor/3"), "/api/images/mentor/3");
}

#[test]
fn match_request_endpoints() {
    assert_eq!(match_request_endpoint(12), "/match-requests/12");
    assert_eq!(match_request_action_endpoint(12, "accept"), "/match-requests/12/accept");
    assert_eq!(match_request_action_endpoint(7, "reject"), "/match-requests/7/reject");
}

// =============================================================
// Mentor directory query pairs
// =============================================================

#[test]
fn mentors_query_empty_filters_produce_no_pairs() {
    assert!(mentors_query("", "").is_empty());
}

#[test]
fn mentors_query_includes_only_present_filters() {
    assert_eq!(mentors_query("rust", ""), vec![("skill", "rust".to_owned())]);
    assert_eq!(mentors_query("", "name"), vec![("order_by", "name".to_owned())]);
}

#[test]
fn mentors_query_combines_filter_and_order() {
    assert_eq!(
        mentors_query("react native", "skill"),
        vec![
            ("skill", "react native".to_owned()),
            ("order_by", "skill".to_owned()),
        ]
    );
}

// =============================================================
// Token preview for logs
// =============================================================

#[test]
fn token_preview_truncates_long_tokens() {
    assert_eq!(token_preview("abcdefghijklmnop"), "abcdefgh...");
}

#[test]
fn token_preview_keeps_short_tokens_whole() {
    assert_eq!(token_preview("abc"), "abc...");
}
