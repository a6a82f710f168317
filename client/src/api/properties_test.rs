use super::*;

#[test]
fn list_request_includes_only_set_filters() {
    let query = PropertyQuery {
        agent: Some("a1".to_owned()),
        verified: Some(true),
        ..PropertyQuery::default()
    };
    let request = list_properties_request("t", &query);

    assert_eq!(request.path, "/properties");
    assert_eq!(
        request.query,
        vec![("agent".to_owned(), "a1".to_owned()), ("verified".to_owned(), "true".to_owned())]
    );
}

#[test]
fn list_request_with_empty_filter_has_no_query() {
    let request = list_properties_request("t", &PropertyQuery::default());
    assert!(request.query.is_empty());
}

#[test]
fn buy_request_posts_property_and_user_ids() {
    let request = buy_request("t-user", "p1", "u1");

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.path, "/properties/buy");
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "property_id": "p1", "user_id": "u1" }))
    );
}

#[test]
fn merge_market_tags_available_then_bought() {
    let available = vec![Property { id: "p1".to_owned(), ..Property::default() }];
    let bought = vec![Property { id: "p2".to_owned(), ..Property::default() }];

    let merged = merge_market(available, bought);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].id, "p1");
    assert_eq!(merged[0].market_status, Some(MarketStatus::Available));
    assert_eq!(merged[1].id, "p2");
    assert_eq!(merged[1].market_status, Some(MarketStatus::Bought));
}

#[test]
fn merge_market_with_empty_feeds_is_empty() {
    assert!(merge_market(Vec::new(), Vec::new()).is_empty());
}
