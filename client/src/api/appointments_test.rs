use super::*;

#[test]
fn open_for_matches_dashboard_defaults() {
    let query = AppointmentQuery::open_for("a1");
    assert_eq!(query.agent, "a1");
    assert!(!query.completed);
    assert_eq!(query.page, 0);
    assert_eq!(query.limit, 10);
}

#[test]
fn list_request_scopes_to_agent_and_completion() {
    let request = list_appointments_request("t", &AppointmentQuery::open_for("a1"));

    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.path, "/appointments");
    assert_eq!(
        request.query,
        vec![
            ("agent".to_owned(), "a1".to_owned()),
            ("completed".to_owned(), "false".to_owned()),
            ("page".to_owned(), "0".to_owned()),
            ("limit".to_owned(), "10".to_owned()),
        ]
    );
}

#[test]
fn book_request_carries_the_full_booking() {
    let booking = NewAppointment {
        property_id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        date: "2026-09-01".to_owned(),
        msg: "first viewing".to_owned(),
        time: listings::TimeSlot { from: "10:00".to_owned(), to: "11:00".to_owned() },
    };
    let request = book_request("t-user", &booking);

    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.path, "/appointments");
    assert_eq!(
        request.body,
        Some(serde_json::json!({
            "property_id": "p1",
            "user_id": "u1",
            "date": "2026-09-01",
            "msg": "first viewing",
            "time": { "from": "10:00", "to": "11:00" }
        }))
    );
}
