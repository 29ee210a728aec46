//! Aircraft HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{EntityId, ValidatedJson};
use crate::query::{AircraftFilter, Page};
use crate::services::aircraft::{AircraftInput, AircraftService};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AircraftListQuery {
    pub id: Option<i64>,
    pub model: Option<String>,
    pub capacity: Option<i32>,
    pub airline_id: Option<i64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl AircraftListQuery {
    fn into_criteria(self) -> (AircraftFilter, Page) {
        let filter = AircraftFilter {
            id: self.id,
            model: self.model,
            capacity: self.capacity,
            airline_id: self.airline_id,
        };
        (filter, Page::new(self.offset, self.limit))
    }
}

/// POST /aircraft
///
/// 422 when `airline_id` does not name an existing airline.
async fn create_aircraft(
    http_req: HttpRequest,
    body: ValidatedJson<AircraftInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let craft = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AircraftService::new()
                .create(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(craft))
}

/// GET /aircraft?id=&model=&capacity=&airline_id=&offset=&limit=
async fn list_aircraft(
    http_req: HttpRequest,
    query: web::Query<AircraftListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (filter, page) = query.into_inner().into_criteria();
    let fleet = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AircraftService::new()
                .list(txn, &filter, page)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(fleet))
}

/// GET /aircraft/{id}
///
/// The owning airline is returned inline.
async fn get_aircraft(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let craft = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AircraftService::new()
                .get_with_airline(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(craft))
}

/// PUT /aircraft/{id}
async fn update_aircraft(
    http_req: HttpRequest,
    id: EntityId,
    body: ValidatedJson<AircraftInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let craft = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AircraftService::new()
                .update(txn, id.0, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(craft))
}

/// DELETE /aircraft/{id}
async fn delete_aircraft(
    http_req: HttpRequest,
    id: EntityId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let craft = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            AircraftService::new()
                .delete(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(craft))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::post().to(create_aircraft))
            .route(web::get().to(list_aircraft)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_aircraft))
            .route(web::put().to(update_aircraft))
            .route(web::delete().to(delete_aircraft)),
    );
}
