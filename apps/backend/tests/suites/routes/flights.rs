use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem;
use serde_json::{json, Value};
use time::macros::datetime;

use crate::common::{ids, read_json};
use crate::support::{create_test_app, db_of, factory, fresh_state};

fn flight_body(airline_id: i64, aircraft_id: i64, departure: &str, arrival: &str) -> Value {
    json!({
        "flight_number": 100,
        "origin": "AAA",
        "destination": "BBB",
        "departure": departure,
        "arrival": arrival,
        "status": "scheduled",
        "aircraft_id": aircraft_id,
        "airline_id": airline_id,
    })
}

#[actix_web::test]
async fn create_update_delete_roundtrip() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            airline.id,
            craft.id,
            "2024-01-01T10:00:00Z",
            "2024-01-01T12:00:00Z",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["departure"], "2024-01-01T10:00:00Z");

    let mut changed = flight_body(
        airline.id,
        craft.id,
        "2024-01-02T10:00:00Z",
        "2024-01-02T12:30:00Z",
    );
    changed["status"] = json!("delayed");
    let req = test::TestRequest::put()
        .uri(&format!("/flights/{id}"))
        .set_json(changed)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["status"], "delayed");
    assert_eq!(updated["arrival"], "2024-01-02T12:30:00Z");

    let req = test::TestRequest::delete()
        .uri(&format!("/flights/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, updated);

    let req = test::TestRequest::get()
        .uri(&format!("/flights/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "FLIGHT_NOT_FOUND", StatusCode::NOT_FOUND).await;

    let req = test::TestRequest::get()
        .uri(&format!("/flights?id={id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[actix_web::test]
async fn departure_must_precede_arrival() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            airline.id,
            craft.id,
            "2024-01-01T12:00:00Z",
            "2024-01-01T12:00:00Z",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn unknown_references_are_unprocessable() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            999,
            craft.id,
            "2024-01-01T10:00:00Z",
            "2024-01-01T12:00:00Z",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "UNKNOWN_AIRLINE", StatusCode::UNPROCESSABLE_ENTITY).await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            airline.id,
            999,
            "2024-01-01T10:00:00Z",
            "2024-01-01T12:00:00Z",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "UNKNOWN_AIRCRAFT", StatusCode::UNPROCESSABLE_ENTITY).await;
}

#[actix_web::test]
async fn malformed_timestamp_in_body_is_rejected() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            airline.id,
            craft.id,
            "yesterday",
            "2024-01-01T12:00:00Z",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn date_range_includes_the_whole_last_day() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let before = factory::flight(db, &craft, 1, ("AAA", "BBB"), datetime!(2023-12-31 23:59 UTC)).await;
    let first = factory::flight(db, &craft, 2, ("AAA", "BBB"), datetime!(2024-01-01 00:00 UTC)).await;
    let last = factory::flight(db, &craft, 3, ("AAA", "BBB"), datetime!(2024-01-31 23:59:59 UTC)).await;
    let after = factory::flight(db, &craft, 4, ("AAA", "BBB"), datetime!(2024-02-01 00:00 UTC)).await;
    let app = create_test_app(state).build().await;

    let get = |uri: &str| test::TestRequest::get().uri(uri).to_request();

    let body = read_json(test::call_service(&app, get("/flights?from=2024-01-01&to=2024-01-31")).await).await;
    assert_eq!(ids(&body), vec![first.id, last.id]);

    let body = read_json(test::call_service(&app, get("/flights?from=2024-02-01")).await).await;
    assert_eq!(ids(&body), vec![after.id]);

    let body = read_json(test::call_service(&app, get("/flights?to=2023-12-31")).await).await;
    assert_eq!(ids(&body), vec![before.id]);
}

#[actix_web::test]
async fn last_calendar_day_is_a_valid_upper_bound() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let flight = factory::flight(db, &craft, 1, ("AAA", "BBB"), datetime!(2024-01-01 10:00 UTC)).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri("/flights?to=9999-12-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ids(&read_json(resp).await), vec![flight.id]);

    let req = test::TestRequest::get()
        .uri("/flights?from=9999-12-31&to=9999-12-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[actix_web::test]
async fn body_instant_beyond_the_calendar_is_rejected() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/flights")
        .set_json(flight_body(
            airline.id,
            craft.id,
            "9999-12-31T22:00:00-01:00",
            "9999-12-31T23:59:59-01:00",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn malformed_dates_are_rejected_not_ignored() {
    let app = create_test_app(fresh_state().await).build().await;

    for uri in ["/flights?from=01/01/2024", "/flights?to=2024-02-30"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, "INVALID_DATE", StatusCode::BAD_REQUEST).await;
    }
}

#[actix_web::test]
async fn airline_search_and_sort_compose() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let sw = factory::airline(db, "Skyways", "SW").await;
    let ta_craft = factory::aircraft(db, ta.id, "A320", 180).await;
    let sw_craft = factory::aircraft(db, sw.id, "E190", 100).await;
    let late = factory::flight(db, &ta_craft, 1, ("GRU", "GIG"), datetime!(2024-01-03 10:00 UTC)).await;
    let early = factory::flight(db, &ta_craft, 2, ("GIG", "BSB"), datetime!(2024-01-01 10:00 UTC)).await;
    let other = factory::flight(db, &sw_craft, 3, ("GIG", "GRU"), datetime!(2024-01-02 10:00 UTC)).await;
    let app = create_test_app(state).build().await;

    let get = |uri: &str| test::TestRequest::get().uri(uri).to_request();

    let body = read_json(test::call_service(&app, get("/flights?airline=test")).await).await;
    assert_eq!(ids(&body), vec![late.id, early.id]);

    let body = read_json(test::call_service(&app, get("/flights?search=gru")).await).await;
    assert_eq!(ids(&body), vec![late.id, other.id]);

    let body = read_json(test::call_service(&app, get("/flights?sort=departure")).await).await;
    assert_eq!(ids(&body), vec![early.id, other.id, late.id]);

    let body = read_json(test::call_service(&app, get("/flights?airline=test&sort=departure")).await).await;
    assert_eq!(ids(&body), vec![early.id, late.id]);

    let body = read_json(test::call_service(&app, get("/flights?sort=altitude")).await).await;
    assert_eq!(ids(&body), vec![late.id, early.id, other.id]);
}

#[actix_web::test]
async fn complete_listing_expands_every_flight() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, ta.id, "A320", 180).await;
    factory::aircraft(db, ta.id, "A321", 220).await;
    let day = datetime!(2024-01-01 10:00 UTC);
    let f1 = factory::flight(db, &craft, 1, ("AAA", "BBB"), day).await;
    let f2 = factory::flight(db, &craft, 2, ("BBB", "AAA"), day).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/flights/complete").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(ids(&body), vec![f1.id, f2.id]);
    assert_eq!(body[0]["airline"]["aircraft"].as_array().unwrap().len(), 2);
    assert_eq!(body[1]["aircraft"]["airline"]["iata_code"], "TA");
}
