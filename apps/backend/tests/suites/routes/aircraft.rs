use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem;
use serde_json::json;
use time::macros::datetime;

use crate::common::{ids, read_json};
use crate::support::{create_test_app, db_of, factory, fresh_state};

#[actix_web::test]
async fn create_accepts_offset_and_naive_timestamps() {
    let state = fresh_state().await;
    let airline = factory::airline(db_of(&state), "Test Air", "TA").await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/aircraft")
        .set_json(json!({
            "model": "A320",
            "capacity": 180,
            "last_inspection": "2024-01-01T12:00:00+02:00",
            "next_inspection": "2024-07-01T10:00:00",
            "airline_id": airline.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["last_inspection"], "2024-01-01T10:00:00Z");
    assert_eq!(body["next_inspection"], "2024-07-01T10:00:00Z");
    assert_eq!(body["airline_id"], airline.id);
}

#[actix_web::test]
async fn omitted_inspections_default_to_now() {
    let state = fresh_state().await;
    let airline = factory::airline(db_of(&state), "Test Air", "TA").await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/aircraft")
        .set_json(json!({ "model": "A320", "capacity": 180, "airline_id": airline.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert!(body["last_inspection"].as_str().unwrap().ends_with('Z'));
    assert_eq!(body["last_inspection"], body["next_inspection"]);
}

#[actix_web::test]
async fn unknown_airline_is_unprocessable() {
    let app = create_test_app(fresh_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/aircraft")
        .set_json(json!({ "model": "A320", "capacity": 180, "airline_id": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "UNKNOWN_AIRLINE", StatusCode::UNPROCESSABLE_ENTITY).await;
}

#[actix_web::test]
async fn capacity_must_be_positive() {
    let state = fresh_state().await;
    let airline = factory::airline(db_of(&state), "Test Air", "TA").await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/aircraft")
        .set_json(json!({ "model": "A320", "capacity": 0, "airline_id": airline.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn get_inlines_the_reduced_airline() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let craft = factory::aircraft(db, airline.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/aircraft/{}", craft.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["model"], "A320");
    assert_eq!(
        body["airline"],
        json!({ "id": airline.id, "name": "Test Air", "iata_code": "TA" })
    );

    let req = test::TestRequest::get().uri("/aircraft/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "AIRCRAFT_NOT_FOUND", StatusCode::NOT_FOUND).await;

    let req = test::TestRequest::get().uri("/aircraft?id=999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[actix_web::test]
async fn inspection_beyond_the_calendar_is_rejected() {
    let state = fresh_state().await;
    let airline = factory::airline(db_of(&state), "Test Air", "TA").await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/aircraft")
        .set_json(json!({
            "model": "A320",
            "capacity": 180,
            "next_inspection": "9999-12-31T23:59:59-01:00",
            "airline_id": airline.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn update_can_move_aircraft_between_airlines() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let sw = factory::airline(db, "Skyways", "SW").await;
    let craft = factory::aircraft(db, ta.id, "A320", 180).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/aircraft/{}", craft.id))
        .set_json(json!({ "model": "A320neo", "capacity": 186, "airline_id": sw.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["airline_id"], sw.id);
    assert_eq!(body["capacity"], 186);

    let req = test::TestRequest::put()
        .uri(&format!("/aircraft/{}", craft.id))
        .set_json(json!({ "model": "A320neo", "capacity": 186, "airline_id": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "UNKNOWN_AIRLINE", StatusCode::UNPROCESSABLE_ENTITY).await;
}

#[actix_web::test]
async fn delete_is_refused_while_flights_reference_it() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let airline = factory::airline(db, "Test Air", "TA").await;
    let busy = factory::aircraft(db, airline.id, "A320", 180).await;
    let idle = factory::aircraft(db, airline.id, "E190", 100).await;
    factory::flight(db, &busy, 100, ("AAA", "BBB"), datetime!(2024-01-01 10:00 UTC)).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/aircraft/{}", busy.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "HAS_DEPENDENTS", StatusCode::CONFLICT).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/aircraft/{}", idle.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["id"], idle.id);
}

#[actix_web::test]
async fn listing_filters_by_model_capacity_and_airline() {
    let state = fresh_state().await;
    let db = db_of(&state);
    let ta = factory::airline(db, "Test Air", "TA").await;
    let sw = factory::airline(db, "Skyways", "SW").await;
    let a = factory::aircraft(db, ta.id, "Airbus A320", 180).await;
    let b = factory::aircraft(db, sw.id, "Airbus A321", 220).await;
    let c = factory::aircraft(db, sw.id, "Embraer 190", 100).await;
    let app = create_test_app(state).build().await;

    let get = |uri: String| test::TestRequest::get().uri(&uri).to_request();

    let body = read_json(test::call_service(&app, get("/aircraft?model=airbus".into())).await).await;
    assert_eq!(ids(&body), vec![a.id, b.id]);

    let body = read_json(test::call_service(&app, get("/aircraft?capacity=100".into())).await).await;
    assert_eq!(ids(&body), vec![c.id]);

    let body = read_json(
        test::call_service(&app, get(format!("/aircraft?airline_id={}&model=airbus", sw.id))).await,
    )
    .await;
    assert_eq!(ids(&body), vec![b.id]);

    let resp = test::call_service(&app, get("/aircraft?capacity=lots".into())).await;
    assert_problem(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST).await;
}
