use actix_web::http::StatusCode;
use actix_web::test;
use fleetdesk::AppState;

use crate::common::read_json;
use crate::support::{create_test_app, fresh_state};

#[actix_web::test]
async fn reports_database_and_migration_state() {
    let app = create_test_app(fresh_state().await).build().await;

    let req = test::TestRequest::get().uri("/health/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_ne!(body["migrations"], "no_migrations");
    assert!(body.get("db_error").is_none());
}

#[actix_web::test]
async fn missing_database_is_reported_not_fatal() {
    let app = create_test_app(AppState::without_db()).build().await;

    let req = test::TestRequest::get().uri("/health/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].is_string());
}
