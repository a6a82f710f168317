use super::*;

#[test]
fn login_request_posts_trimmed_credentials() {
    let request = login_request(" ada@example.test ", " secret ");

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.path, "/auth/login");
    assert_eq!(request.token, None);
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "email": "ada@example.test", "password": "secret" }))
    );
}
