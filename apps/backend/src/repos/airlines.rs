//! Airline repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::airlines_sea::{self as airlines_adapter, AirlineFields};
use crate::errors::domain::DomainError;
use crate::query::{AirlineFilter, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airline {
    pub id: i64,
    pub name: String,
    pub iata_code: String,
}

pub async fn create_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: AirlineFields,
) -> Result<Airline, DomainError> {
    let model = airlines_adapter::insert(conn, fields).await?;
    Ok(Airline::from(model))
}

pub async fn find_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Airline>, DomainError> {
    let model = airlines_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Airline::from))
}

pub async fn airline_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(airlines_adapter::exists(conn, id).await?)
}

pub async fn list_airlines<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AirlineFilter,
    page: Page,
) -> Result<Vec<Airline>, DomainError> {
    let models = airlines_adapter::list(conn, filter, page).await?;
    Ok(models.into_iter().map(Airline::from).collect())
}

pub async fn update_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    fields: AirlineFields,
) -> Result<Airline, DomainError> {
    let model = airlines_adapter::update(conn, id, fields).await?;
    Ok(Airline::from(model))
}

/// Returns true when a row was removed.
pub async fn delete_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    let removed = airlines_adapter::delete_by_id(conn, id)
        .await
        .map_err(super::delete_err)?;
    Ok(removed > 0)
}

/// Aircraft and flights still owned by the airline.
pub async fn airline_dependents<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(u64, u64), DomainError> {
    Ok(airlines_adapter::count_dependents(conn, id).await?)
}

impl From<crate::entities::airlines::Model> for Airline {
    fn from(model: crate::entities::airlines::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            iata_code: model.iata_code,
        }
    }
}
