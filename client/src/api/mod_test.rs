use super::*;

#[test]
fn parse_payload_unwraps_the_data_field() {
    let payload = parse_payload(200, r#"{"data": {"id": "p1"}, "msg": "ok"}"#).expect("parse");
    assert_eq!(payload, serde_json::json!({"id": "p1"}));
}

#[test]
fn parse_payload_passes_bare_records_through() {
    let payload = parse_payload(200, r#"{"id": "p1", "name": "Flat"}"#).expect("parse");
    assert_eq!(payload, serde_json::json!({"id": "p1", "name": "Flat"}));
}

#[test]
fn parse_payload_surfaces_server_msg_on_error_status() {
    let err = parse_payload(404, r#"{"msg": "property not found"}"#).expect_err("should fail");
    match err {
        ApiError::Api { status, msg } => {
            assert_eq!(status, 404);
            assert_eq!(msg, "property not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_payload_falls_back_to_generic_message() {
    let err = parse_payload(500, "internal server error").expect_err("should fail");
    match err {
        ApiError::Api { status, msg } => {
            assert_eq!(status, 500);
            assert_eq!(msg, GENERIC_API_ERROR);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_payload_accepts_non_json_success_as_null() {
    let payload = parse_payload(204, "").expect("parse");
    assert_eq!(payload, serde_json::Value::Null);
}

#[test]
fn request_builder_accumulates_query_in_order() {
    let request = ApiRequest::new(Method::GET, "/properties")
        .query("agent", "a1")
        .query("verified", true)
        .bearer("tok");

    assert_eq!(request.path, "/properties");
    assert_eq!(
        request.query,
        vec![("agent".to_owned(), "a1".to_owned()), ("verified".to_owned(), "true".to_owned())]
    );
    assert_eq!(request.token.as_deref(), Some("tok"));
    assert_eq!(request.body, None);
}

#[test]
fn decode_maps_shape_mismatch_to_decode_error() {
    let err = decode::<Vec<listings::User>>(serde_json::json!({"id": "u1"}))
        .expect_err("object is not a list");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn client_rejects_base_url_without_scheme() {
    let config = crate::ClientConfig {
        base_url: "property.example.test/v1".to_owned(),
        session_file: std::path::PathBuf::from("/tmp/unused"),
        timeouts: crate::config::HttpTimeouts { request_secs: 1, connect_secs: 1 },
    };
    let err = ApiClient::new(&config).expect_err("should reject");
    assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
}
