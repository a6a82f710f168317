use super::*;

#[test]
fn list_reviews_is_one_get_scoped_to_the_property() {
    let request = list_reviews_request("t", "p1", 0, 10);

    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.path, "/reviews");
    assert_eq!(
        request.query,
        vec![
            ("property_id".to_owned(), "p1".to_owned()),
            ("limit".to_owned(), "10".to_owned()),
            ("page".to_owned(), "0".to_owned()),
        ]
    );
    assert_eq!(request.body, None);
}
