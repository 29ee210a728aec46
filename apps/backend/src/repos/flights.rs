//! Flight repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::flights_sea::{self as flights_adapter, FlightFields};
use crate::errors::domain::DomainError;
use crate::query::{FlightFilter, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub id: i64,
    pub flight_number: i32,
    pub origin: String,
    pub destination: String,
    #[serde(with = "crate::timestamps::flexible")]
    pub departure: OffsetDateTime,
    #[serde(with = "crate::timestamps::flexible")]
    pub arrival: OffsetDateTime,
    pub status: String,
    pub aircraft_id: i64,
    pub airline_id: i64,
}

pub async fn create_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: FlightFields,
) -> Result<Flight, DomainError> {
    let model = flights_adapter::insert(conn, fields).await?;
    Ok(Flight::from(model))
}

pub async fn find_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Flight>, DomainError> {
    let model = flights_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Flight::from))
}

pub async fn list_flights<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &FlightFilter,
    page: Page,
) -> Result<Vec<Flight>, DomainError> {
    let models = flights_adapter::list(conn, filter, page).await?;
    Ok(models.into_iter().map(Flight::from).collect())
}

pub async fn update_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    fields: FlightFields,
) -> Result<Flight, DomainError> {
    let model = flights_adapter::update(conn, id, fields).await?;
    Ok(Flight::from(model))
}

pub async fn delete_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    let removed = flights_adapter::delete_by_id(conn, id)
        .await
        .map_err(super::delete_err)?;
    Ok(removed > 0)
}

impl From<crate::entities::flights::Model> for Flight {
    fn from(model: crate::entities::flights::Model) -> Self {
        Self {
            id: model.id,
            flight_number: model.flight_number,
            origin: model.origin,
            destination: model.destination,
            departure: model.departure,
            arrival: model.arrival,
            status: model.status,
            aircraft_id: model.aircraft_id,
            airline_id: model.airline_id,
        }
    }
}
