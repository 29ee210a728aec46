//! Airline HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::query::{AirlineFilter, AirlineSort, Page};
use crate::services::airlines::{AirlineInput, AirlineService};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AirlineListQuery {
    pub id: Option<i64>,
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub sort: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl AirlineListQuery {
    fn into_criteria(self) -> (AirlineFilter, Page) {
        let filter = AirlineFilter {
            id: self.id,
            iata_code: self.iata_code,
            name: self.name,
            sort: self.sort.as_deref().and_then(AirlineSort::parse),
        };
        (filter, Page::new(self.offset, self.limit))
    }
}

/// POST /airlines
async fn create_airline(
    http_req: HttpRequest,
    body: ValidatedJson<AirlineInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let airline = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AirlineService::new()
                .create(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(airline))
}

/// GET /airlines?id=&iata_code=&name=&sort=name&offset=&limit=
///
/// An empty match is `200 []`.
async fn list_airlines(
    http_req: HttpRequest,
    query: web::Query<AirlineListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (filter, page) = query.into_inner().into_criteria();
    let airlines = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AirlineService::new()
                .list(txn, &filter, page)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(airlines))
}

/// GET /airlines/complete
///
/// Every airline with its fleet nested.
async fn list_airlines_complete(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let airlines = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            AirlineService::new()
                .complete(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(airlines))
}

/// GET /airlines/{id}
async fn get_airline(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let airline = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AirlineService::new()
                .get(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(airline))
}

/// PUT /airlines/{id}
async fn update_airline(
    http_req: HttpRequest,
    id: EntityId,
    body: ValidatedJson<AirlineInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let airline = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AirlineService::new()
                .update(txn, id.0, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(airline))
}

/// DELETE /airlines/{id}
///
/// 409 while aircraft or flights still reference the airline.
async fn delete_airline(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let airline = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AirlineService::new()
                .delete(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(airline))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::post().to(create_airline))
            .route(web::get().to(list_airlines)),
    );
    // Registered ahead of "/{id}" so the literal segment wins.
    cfg.service(web::resource("/complete").route(web::get().to(list_airlines_complete)));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_airline))
            .route(web::put().to(update_airline))
            .route(web::delete().to(delete_airline)),
    );
}
