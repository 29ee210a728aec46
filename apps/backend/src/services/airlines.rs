//! Airline domain service.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use super::require_text;
use crate::adapters::airlines_sea::AirlineFields;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::query::{AirlineFilter, Page};
use crate::repos::airlines::{self, Airline};
use crate::repos::projections::{self, AirlineWithAircraft};

/// Body of `POST /airlines` and `PUT /airlines/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirlineInput {
    pub name: String,
    pub iata_code: String,
}

impl AirlineInput {
    fn into_fields(self) -> Result<AirlineFields, DomainError> {
        Ok(AirlineFields::new(
            require_text("name", self.name)?,
            require_text("iata_code", self.iata_code)?,
        ))
    }
}

pub(crate) fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Airline, format!("Airline {id} not found"))
}

/// Airline domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct AirlineService;

impl AirlineService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: AirlineInput,
    ) -> Result<Airline, DomainError> {
        let airline = airlines::create_airline(conn, input.into_fields()?).await?;
        info!(airline_id = airline.id, iata_code = %airline.iata_code, "airline.created");
        Ok(airline)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Airline, DomainError> {
        airlines::find_airline(conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Filtered page; no match is an empty page, not an error.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &AirlineFilter,
        page: Page,
    ) -> Result<Vec<Airline>, DomainError> {
        airlines::list_airlines(conn, filter, page).await
    }

    pub async fn complete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<AirlineWithAircraft>, DomainError> {
        projections::airlines_with_aircraft(conn).await
    }

    /// Whole-record replacement.
    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        input: AirlineInput,
    ) -> Result<Airline, DomainError> {
        let fields = input.into_fields()?;
        self.get(conn, id).await?;
        let airline = airlines::update_airline(conn, id, fields).await?;
        info!(airline_id = id, "airline.updated");
        Ok(airline)
    }

    /// Delete and return the removed record. Refused while aircraft or
    /// flights still reference the airline.
    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Airline, DomainError> {
        let airline = self.get(conn, id).await?;

        let (aircraft, flights) = airlines::airline_dependents(conn, id).await?;
        if aircraft > 0 || flights > 0 {
            return Err(DomainError::conflict(
                ConflictKind::HasDependents,
                format!(
                    "Airline {id} still has {aircraft} aircraft and {flights} flights"
                ),
            ));
        }

        if !airlines::delete_airline(conn, id).await? {
            return Err(not_found(id));
        }
        info!(airline_id = id, "airline.deleted");
        Ok(airline)
    }
}
