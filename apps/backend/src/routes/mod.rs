use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod aircraft;
pub mod airlines;
pub mod flights;
pub mod health;
pub mod reports;

/// Malformed query strings (e.g. `limit=-1`, `capacity=abc`) become 400 problems.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {err}"))
            .into()
    })
}

/// Register every route. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config());

    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/airlines").configure(airlines::configure_routes));
    cfg.service(web::scope("/aircraft").configure(aircraft::configure_routes));
    cfg.service(web::scope("/flights").configure(flights::configure_routes));
    cfg.service(web::scope("/reports").configure(reports::configure_routes));
}
