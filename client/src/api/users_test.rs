use super::*;

fn registration_form() -> NewUser {
    NewUser {
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.test".to_owned(),
        phone: "0800000000".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn registration_issues_one_post_to_users_with_all_fields() {
    let request = create_user_request("t-agent", &registration_form());

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.path, "/users");
    assert_eq!(request.token.as_deref(), Some("t-agent"));
    assert_eq!(
        request.body,
        Some(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "ada@example.test",
            "phone": "0800000000",
            "password": "secret"
        }))
    );
}

#[test]
fn list_users_paginates_with_page_and_limit() {
    let request = list_users_request("t", Page { page: 1, limit: 50 });

    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.path, "/users");
    assert_eq!(
        request.query,
        vec![("limit".to_owned(), "50".to_owned()), ("page".to_owned(), "1".to_owned())]
    );
}

#[test]
fn default_page_matches_dashboard_window() {
    let page = Page::default();
    assert_eq!(page.page, 0);
    assert_eq!(page.limit, 5);
}
