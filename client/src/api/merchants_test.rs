use super::*;

#[test]
fn list_agents_request_uses_offset_pagination() {
    let request = list_agents_request("t-merchant", 2, 5);

    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.path, "/merchants/agents");
    assert_eq!(
        request.query,
        vec![("offset".to_owned(), "2".to_owned()), ("limit".to_owned(), "5".to_owned())]
    );
}

#[test]
fn verify_agent_request_posts_flag_toggle() {
    let request = verify_agent_request("t-merchant", "a1", true);

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.path, "/merchants/verify-agent");
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "agent_id": "a1", "is_verified": true }))
    );
}

#[test]
fn more_pages_continues_while_total_not_reached() {
    // 12 agents, 5 per page: pages 0 and 1 continue, page 2 is the last.
    assert!(more_pages(5, 0, 5, Some(12)));
    assert!(more_pages(5, 1, 5, Some(12)));
    assert!(!more_pages(2, 2, 5, Some(12)));
}

#[test]
fn more_pages_stops_on_empty_page() {
    assert!(!more_pages(0, 0, 5, Some(100)));
}

#[test]
fn more_pages_stops_without_a_total() {
    assert!(!more_pages(5, 0, 5, None));
}
