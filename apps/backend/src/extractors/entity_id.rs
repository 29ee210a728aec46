use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive row id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i64);

impl EntityId {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id"))?;

        let id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}"))
        })?;

        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidId,
                format!("Id must be positive, got: {id}"),
            ));
        }

        Ok(EntityId(id))
    }
}

impl FromRequest for EntityId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req.match_info().get("id")))
    }
}
