use super::*;

fn login_data(token: Option<&str>, role: Option<&str>) -> LoginData {
    serde_json::from_value(serde_json::json!({
        "token": token,
        "role": role,
        "id": "id-1",
        "user": {"first_name": "Ada"}
    }))
    .expect("login data")
}

fn temp_store(name: &str) -> SessionStore {
    let path = std::env::temp_dir().join(format!("hearth-session-{name}-{}", std::process::id()));
    let _ = std::fs::remove_file(&path);
    SessionStore::new(path)
}

#[test]
fn apply_login_routes_agent_role_to_agent_slot() {
    let mut session = Session::default();
    let role = session
        .apply_login(&login_data(Some("t-agent"), Some("AGENT")))
        .expect("login");

    assert_eq!(role, listings::Role::Agent);
    assert_eq!(session.token_for(listings::Role::Agent), Some("t-agent"));
    assert!(session.user.is_none());
    assert!(session.merchant.is_none());
}

#[test]
fn apply_login_defaults_unknown_role_to_user_slot() {
    let mut session = Session::default();
    let role = session
        .apply_login(&login_data(Some("t-user"), None))
        .expect("login");

    assert_eq!(role, listings::Role::User);
    assert_eq!(session.token_for(listings::Role::User), Some("t-user"));
}

#[test]
fn failed_login_leaves_session_unchanged() {
    let mut session = Session::default();
    session
        .apply_login(&login_data(Some("t-old"), Some("MERCHANT")))
        .expect("login");

    let err = session
        .apply_login(&login_data(None, Some("MERCHANT")))
        .expect_err("login without token should fail");
    assert!(matches!(err, ApiError::MissingLoginToken));
    assert_eq!(session.token_for(listings::Role::Merchant), Some("t-old"));

    let err = session
        .apply_login(&login_data(Some(""), Some("MERCHANT")))
        .expect_err("empty token should fail");
    assert!(matches!(err, ApiError::MissingLoginToken));
    assert_eq!(session.token_for(listings::Role::Merchant), Some("t-old"));
}

#[test]
fn clear_one_role_keeps_the_others() {
    let mut session = Session::default();
    session.apply_login(&login_data(Some("t-a"), Some("AGENT"))).expect("login");
    session.apply_login(&login_data(Some("t-u"), Some("USER"))).expect("login");

    session.clear(Some(listings::Role::Agent));
    assert!(session.agent.is_none());
    assert_eq!(session.token_for(listings::Role::User), Some("t-u"));
}

#[test]
fn clear_all_empties_every_slot() {
    let mut session = Session::default();
    session.apply_login(&login_data(Some("t-a"), Some("AGENT"))).expect("login");
    session.apply_login(&login_data(Some("t-u"), Some("USER"))).expect("login");
    session.apply_login(&login_data(Some("t-m"), Some("MERCHANT"))).expect("login");

    session.clear(None);
    assert_eq!(session, Session::default());
}

#[test]
fn any_token_prefers_agent_then_user_then_merchant() {
    let mut session = Session::default();
    session.apply_login(&login_data(Some("t-m"), Some("MERCHANT"))).expect("login");
    assert_eq!(session.any_token(), Some((listings::Role::Merchant, "t-m")));

    session.apply_login(&login_data(Some("t-u"), Some("USER"))).expect("login");
    assert_eq!(session.any_token(), Some((listings::Role::User, "t-u")));

    session.apply_login(&login_data(Some("t-a"), Some("AGENT"))).expect("login");
    assert_eq!(session.any_token(), Some((listings::Role::Agent, "t-a")));
}

#[test]
fn require_token_errors_for_signed_out_role() {
    let session = Session::default();
    let err = session
        .require_token(listings::Role::Merchant)
        .expect_err("should be signed out");
    assert!(matches!(err, ApiError::MissingToken { role: listings::Role::Merchant }));
}

#[test]
fn store_load_missing_file_is_empty_session() {
    let store = temp_store("missing");
    let session = store.load().expect("load");
    assert_eq!(session, Session::default());
}

#[test]
fn store_round_trips_session() {
    let store = temp_store("round-trip");
    let mut session = Session::default();
    session.apply_login(&login_data(Some("t-a"), Some("AGENT"))).expect("login");

    store.save(&session).expect("save");
    let loaded = store.load().expect("load");
    assert_eq!(loaded, session);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn store_rejects_corrupt_file() {
    let store = temp_store("corrupt");
    std::fs::write(store.path(), "{not json").expect("write");

    let err = store.load().expect_err("corrupt file should fail");
    assert!(matches!(err, ApiError::SessionCorrupt(_)));

    let _ = std::fs::remove_file(store.path());
}
