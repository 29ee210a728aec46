//! Flight HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::query::{DateRange, FlightFilter, FlightSort, Page};
use crate::services::flights::{FlightInput, FlightService};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FlightListQuery {
    pub id: Option<i64>,
    /// First departure day, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Last departure day (inclusive), `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Partial airline name.
    pub airline: Option<String>,
    /// Partial origin or destination.
    pub search: Option<String>,
    pub sort: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl FlightListQuery {
    fn into_criteria(self) -> Result<(FlightFilter, Page), AppError> {
        let departure = DateRange::parse(self.from.as_deref(), self.to.as_deref())?;
        let filter = FlightFilter {
            id: self.id,
            departure,
            airline_name: self.airline,
            search: self.search,
            sort: self.sort.as_deref().and_then(FlightSort::parse),
        };
        Ok((filter, Page::new(self.offset, self.limit)))
    }
}

/// POST /flights
///
/// 400 unless departure precedes arrival; 422 for an unknown airline or aircraft.
async fn create_flight(
    http_req: HttpRequest,
    body: ValidatedJson<FlightInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let flight = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            FlightService::new()
                .create(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(flight))
}

/// GET /flights?id=&from=&to=&airline=&search=&sort=departure|arrival&offset=&limit=
///
/// A malformed `from`/`to` is `400 INVALID_DATE`.
async fn list_flights(
    http_req: HttpRequest,
    query: web::Query<FlightListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (filter, page) = query.into_inner().into_criteria()?;
    let flights = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            FlightService::new()
                .list(txn, &filter, page)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(flights))
}

/// GET /flights/complete
async fn list_flights_complete(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let flights = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            FlightService::new()
                .complete(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(flights))
}

/// GET /flights/{id}
///
/// Airline (with its roster) and aircraft (with its airline) nested.
async fn get_flight(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let flight = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            FlightService::new()
                .get_expanded(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(flight))
}

/// PUT /flights/{id}
async fn update_flight(
    http_req: HttpRequest,
    id: EntityId,
    body: ValidatedJson<FlightInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let flight = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            FlightService::new()
                .update(txn, id.0, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(flight))
}

/// DELETE /flights/{id}
async fn delete_flight(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let flight = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            FlightService::new()
                .delete(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(flight))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::post().to(create_flight))
            .route(web::get().to(list_flights)),
    );
    cfg.service(web::resource("/complete").route(web::get().to(list_flights_complete)));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_flight))
            .route(web::put().to(update_flight))
            .route(web::delete().to(delete_flight)),
    );
}
