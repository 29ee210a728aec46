//! Aggregate report routes.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::reports;
use crate::state::app_state::AppState;

/// GET /reports/aircraft-count-by-model
///
/// `{ "<model>": <flights flown with that model> }`
async fn aircraft_count_by_model(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let counts = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            reports::aircraft_count_by_model(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(counts))
}

/// GET /reports/aircraft-count-by-airline-and-model
///
/// `[ { "airline", "model", "total_aircraft" } ]`
async fn aircraft_count_by_airline_and_model(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            reports::aircraft_count_by_airline_and_model(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /reports/flight-count-by-airline
///
/// `{ "<airline name>": <flights> }`
async fn flight_count_by_airline(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let counts = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            reports::flight_count_by_airline(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(counts))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/aircraft-count-by-model",
        web::get().to(aircraft_count_by_model),
    )
    .route(
        "/aircraft-count-by-airline-and-model",
        web::get().to(aircraft_count_by_airline_and_model),
    )
    .route(
        "/flight-count-by-airline",
        web::get().to(flight_count_by_airline),
    );
}
