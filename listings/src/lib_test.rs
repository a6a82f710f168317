use super::*;

#[test]
fn role_wire_names_are_uppercase() {
    assert_eq!(Role::User.as_str(), "USER");
    assert_eq!(Role::Agent.as_str(), "AGENT");
    assert_eq!(Role::Merchant.as_str(), "MERCHANT");
}

#[test]
fn role_from_wire_is_case_insensitive() {
    assert_eq!(Role::from_wire(Some("agent")), Role::Agent);
    assert_eq!(Role::from_wire(Some("Merchant")), Role::Merchant);
    assert_eq!(Role::from_wire(Some("USER")), Role::User);
}

#[test]
fn role_from_wire_defaults_unknown_to_user() {
    assert_eq!(Role::from_wire(Some("ADMIN")), Role::User);
    assert_eq!(Role::from_wire(None), Role::User);
}

#[test]
fn role_from_str_rejects_unknown() {
    let err = "landlord".parse::<Role>().expect_err("role should be invalid");
    assert!(matches!(err, RecordError::UnknownRole(_)));
}

#[test]
fn envelope_unwrap_extracts_data_field() {
    let body = serde_json::json!({"data": [{"id": "p1"}], "total": 1});
    assert_eq!(
        Envelope::unwrap_data(body),
        serde_json::json!([{"id": "p1"}])
    );
}

#[test]
fn envelope_unwrap_passes_bare_body_through() {
    let body = serde_json::json!({"id": "p1", "name": "Flat"});
    assert_eq!(Envelope::unwrap_data(body.clone()), body);
}

#[test]
fn envelope_unwrap_treats_null_data_as_absent() {
    let body = serde_json::json!({"data": null, "msg": "empty"});
    assert_eq!(
        Envelope::unwrap_data(body),
        serde_json::json!({"msg": "empty"})
    );
}

#[test]
fn envelope_reads_msg_and_total() {
    let body = serde_json::json!({"msg": "not found", "total": 12});
    assert_eq!(Envelope::message(&body), Some("not found"));
    assert_eq!(Envelope::total(&body), Some(12));
    assert_eq!(Envelope::message(&serde_json::json!({})), None);
}

#[test]
fn user_accepts_mongo_style_id() {
    let user: User =
        serde_json::from_value(serde_json::json!({"_id": "u1", "first_name": "Ada"}))
            .expect("decode");
    assert_eq!(user.id, "u1");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "");
}

#[test]
fn property_maps_type_keyword_and_coerces_numbers() {
    let property: Property = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "2 Bedroom Apartment",
        "type": "RENT",
        "price": "2,500,000",
        "bedroom": "2",
        "bathroom": 1,
        "amenities": ["Gym", "Pool"],
        "verified": true
    }))
    .expect("decode");

    assert_eq!(property.listing_type, "RENT");
    assert_eq!(property.price, Some(2_500_000.0));
    assert_eq!(property.bedroom, Some(2));
    assert_eq!(property.bathroom, Some(1));
    assert_eq!(property.amenities, vec!["Gym", "Pool"]);
    assert!(property.verified);
    assert_eq!(property.market_status, None);
}

#[test]
fn property_rejects_non_numeric_count() {
    let result = serde_json::from_value::<Property>(serde_json::json!({
        "id": "p1",
        "bedroom": "many"
    }));
    assert!(result.is_err());
}

#[test]
fn property_market_status_tag_round_trips() {
    let property = Property::default().with_market_status(MarketStatus::Bought);
    let json = serde_json::to_value(&property).expect("encode");
    assert_eq!(json.get("market_status"), Some(&serde_json::json!("BOUGHT")));
}

#[test]
fn new_property_serializes_type_field() {
    let listing = NewProperty {
        name: "Duplex".to_owned(),
        price: 1000.0,
        country: "NIGERIA".to_owned(),
        state: "ABUJA".to_owned(),
        city: "Gwarinpa".to_owned(),
        lat: "34.27822".to_owned(),
        lng: "-118.3455".to_owned(),
        address: "12 Main St".to_owned(),
        description: String::new(),
        category: "FLAT".to_owned(),
        total_area: "240sqm".to_owned(),
        property_use: "RESIDENTIAL".to_owned(),
        payment_plan: "PER_ANNUM".to_owned(),
        listing_type: "RENT".to_owned(),
        bedroom: 2,
        bathroom: 2,
        toilet: 3,
        parking_space: 4,
        furnishing: "FURNISHED".to_owned(),
        disclaimer: String::new(),
        amenities: vec!["Gym".to_owned()],
        merchant: "m1".to_owned(),
        agent: "a1".to_owned(),
    };

    let json = serde_json::to_value(&listing).expect("encode");
    assert_eq!(json.get("type"), Some(&serde_json::json!("RENT")));
    assert!(json.get("listing_type").is_none());
}

#[test]
fn split_amenities_trims_and_drops_empties() {
    assert_eq!(
        NewProperty::split_amenities("Gym, Swimming Pool , ,24/7 Security"),
        vec!["Gym", "Swimming Pool", "24/7 Security"]
    );
    assert!(NewProperty::split_amenities("").is_empty());
}

#[test]
fn appointment_defaults_flags_and_time() {
    let appointment: Appointment = serde_json::from_value(serde_json::json!({
        "_id": "ap1",
        "property_id": "p1",
        "date": "2026-09-01"
    }))
    .expect("decode");

    assert_eq!(appointment.id, "ap1");
    assert!(!appointment.confirmed);
    assert!(!appointment.completed);
    assert_eq!(appointment.time, TimeSlot::default());
}

#[test]
fn new_appointment_completeness_allows_empty_msg() {
    let booking = NewAppointment {
        property_id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        date: "2026-09-01".to_owned(),
        msg: String::new(),
        time: TimeSlot { from: "10:00".to_owned(), to: "11:00".to_owned() },
    };
    assert!(booking.is_complete());

    let missing_time = NewAppointment { time: TimeSlot::default(), ..booking };
    assert!(!missing_time.is_complete());
}

#[test]
fn new_user_completeness_requires_every_field() {
    let form = NewUser {
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.test".to_owned(),
        phone: "0800000000".to_owned(),
        password: "secret".to_owned(),
    };
    assert!(form.is_complete());

    let missing_phone = NewUser { phone: String::new(), ..form };
    assert!(!missing_phone.is_complete());
}

#[test]
fn wishlist_item_flattens_property_fields() {
    let item: WishlistItem = serde_json::from_value(serde_json::json!({
        "property_id": "p9",
        "_id": "w1",
        "name": "Terrace",
        "type": "SALE"
    }))
    .expect("decode");

    assert_eq!(item.property_id.as_deref(), Some("p9"));
    assert_eq!(item.property.id, "w1");
    assert_eq!(item.property.listing_type, "SALE");
}

#[test]
fn login_data_routes_roles_and_picks_profile() {
    let data: LoginData = serde_json::from_value(serde_json::json!({
        "token": "t-1",
        "role": "agent",
        "_id": "a1",
        "agent": {"full_name": "Bola"}
    }))
    .expect("decode");

    assert_eq!(data.role(), Role::Agent);
    assert_eq!(data.profile(), serde_json::json!({"full_name": "Bola"}));
    assert_eq!(data.id.as_deref(), Some("a1"));
}

#[test]
fn login_data_profile_defaults_to_empty_object() {
    let data = LoginData { token: Some("t".to_owned()), ..LoginData::default() };
    assert_eq!(data.role(), Role::User);
    assert_eq!(data.profile(), serde_json::json!({}));
}
