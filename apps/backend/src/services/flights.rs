//! Flight domain service.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use super::require_text;
use crate::adapters::flights_sea::FlightFields;
use crate::errors::domain::{DomainError, NotFoundKind, ReferenceKind};
use crate::query::{FlightFilter, Page};
use crate::repos::flights::{self, Flight};
use crate::repos::projections::{self, FlightDetail};
use crate::repos::{aircraft, airlines};
use crate::timestamps;

/// Body of `POST /flights` and `PUT /flights/{id}`.
///
/// `departure` and `arrival` are stored at whole-second precision and are
/// compared after truncation, so they must differ by at least a second.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightInput {
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

impl FlightInput {
    fn into_fields(self) -> Result<FlightFields, DomainError> {
        let departure = timestamps::normalize(self.departure)?;
        let arrival = timestamps::normalize(self.arrival)?;
        if departure >= arrival {
            return Err(DomainError::validation_other(
                "departure must be earlier than arrival",
            ));
        }
        Ok(FlightFields {
            flight_number: self.flight_number,
            origin: require_text("origin", self.origin)?,
            destination: require_text("destination", self.destination)?,
            departure,
            arrival,
            status: require_text("status", self.status)?,
            aircraft_id: self.aircraft_id,
            airline_id: self.airline_id,
        })
    }
}

pub(crate) fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Flight, format!("Flight {id} not found"))
}

async fn ensure_references<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: &FlightFields,
) -> Result<(), DomainError> {
    if !airlines::airline_exists(conn, fields.airline_id).await? {
        return Err(DomainError::referential(
            ReferenceKind::Airline,
            format!("Airline {} does not exist", fields.airline_id),
        ));
    }
    if aircraft::find_aircraft(conn, fields.aircraft_id)
        .await?
        .is_none()
    {
        return Err(DomainError::referential(
            ReferenceKind::Aircraft,
            format!("Aircraft {} does not exist", fields.aircraft_id),
        ));
    }
    Ok(())
}

/// Flight domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlightService;

impl FlightService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: FlightInput,
    ) -> Result<Flight, DomainError> {
        let fields = input.into_fields()?;
        ensure_references(conn, &fields).await?;
        let flight = flights::create_flight(conn, fields).await?;
        info!(
            flight_id = flight.id,
            flight_number = flight.flight_number,
            airline_id = flight.airline_id,
            aircraft_id = flight.aircraft_id,
            "flight.created"
        );
        Ok(flight)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Flight, DomainError> {
        flights::find_flight(conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Flight with airline roster and aircraft expanded.
    pub async fn get_expanded<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<FlightDetail, DomainError> {
        projections::flight_expanded(conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &FlightFilter,
        page: Page,
    ) -> Result<Vec<Flight>, DomainError> {
        flights::list_flights(conn, filter, page).await
    }

    pub async fn complete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<FlightDetail>, DomainError> {
        projections::flights_expanded(conn).await
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        input: FlightInput,
    ) -> Result<Flight, DomainError> {
        let fields = input.into_fields()?;
        self.get(conn, id).await?;
        ensure_references(conn, &fields).await?;
        let flight = flights::update_flight(conn, id, fields).await?;
        info!(flight_id = id, status = %flight.status, "flight.updated");
        Ok(flight)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Flight, DomainError> {
        let flight = self.get(conn, id).await?;
        if !flights::delete_flight(conn, id).await? {
            return Err(not_found(id));
        }
        info!(flight_id = id, "flight.deleted");
        Ok(flight)
    }
}
