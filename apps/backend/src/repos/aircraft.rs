//! Aircraft repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::aircraft_sea::{self as aircraft_adapter, AircraftFields};
use crate::errors::domain::DomainError;
use crate::query::{AircraftFilter, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aircraft {
    pub id: i64,
    pub model: String,
    pub capacity: i32,
    #[serde(with = "crate::timestamps::flexible")]
    pub last_inspection: OffsetDateTime,
    #[serde(with = "crate::timestamps::flexible")]
    pub next_inspection: OffsetDateTime,
    pub airline_id: i64,
}

pub async fn create_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: AircraftFields,
) -> Result<Aircraft, DomainError> {
    let model = aircraft_adapter::insert(conn, fields).await?;
    Ok(Aircraft::from(model))
}

pub async fn find_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Aircraft>, DomainError> {
    let model = aircraft_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Aircraft::from))
}

pub async fn list_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AircraftFilter,
    page: Page,
) -> Result<Vec<Aircraft>, DomainError> {
    let models = aircraft_adapter::list(conn, filter, page).await?;
    Ok(models.into_iter().map(Aircraft::from).collect())
}

pub async fn update_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    fields: AircraftFields,
) -> Result<Aircraft, DomainError> {
    let model = aircraft_adapter::update(conn, id, fields).await?;
    Ok(Aircraft::from(model))
}

pub async fn delete_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    let removed = aircraft_adapter::delete_by_id(conn, id)
        .await
        .map_err(super::delete_err)?;
    Ok(removed > 0)
}

pub async fn scheduled_flights<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    Ok(aircraft_adapter::count_flights(conn, id).await?)
}

impl From<crate::entities::aircraft::Model> for Aircraft {
    fn from(model: crate::entities::aircraft::Model) -> Self {
        Self {
            id: model.id,
            model: model.model,
            capacity: model.capacity,
            last_inspection: model.last_inspection,
            next_inspection: model.next_inspection,
            airline_id: model.airline_id,
        }
    }
}
