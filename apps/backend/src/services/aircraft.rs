//! Aircraft domain service.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use super::require_text;
use crate::adapters::aircraft_sea::AircraftFields;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ReferenceKind};
use crate::query::{AircraftFilter, Page};
use crate::repos::aircraft::{self, Aircraft};
use crate::repos::airlines;
use crate::repos::projections::{self, AircraftWithAirline};
use crate::timestamps;

/// Body of `POST /aircraft` and `PUT /aircraft/{id}`.
///
/// Omitted inspection timestamps default to the current instant.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftInput {
    pub model: String,
    pub capacity: i32,
    #[serde(default, with = "crate::timestamps::flexible::option")]
    pub last_inspection: Option<OffsetDateTime>,
    #[serde(default, with = "crate::timestamps::flexible::option")]
    pub next_inspection: Option<OffsetDateTime>,
    pub airline_id: i64,
}

impl AircraftInput {
    fn into_fields(self) -> Result<AircraftFields, DomainError> {
        if self.capacity <= 0 {
            return Err(DomainError::validation_other(format!(
                "capacity must be positive, got {}",
                self.capacity
            )));
        }
        let now = timestamps::normalize(OffsetDateTime::now_utc())?;
        let inspection = |at: Option<OffsetDateTime>| at.map_or(Ok(now), timestamps::normalize);
        Ok(AircraftFields {
            model: require_text("model", self.model)?,
            capacity: self.capacity,
            last_inspection: inspection(self.last_inspection)?,
            next_inspection: inspection(self.next_inspection)?,
            airline_id: self.airline_id,
        })
    }
}

pub(crate) fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Aircraft, format!("Aircraft {id} not found"))
}

async fn ensure_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    airline_id: i64,
) -> Result<(), DomainError> {
    if airlines::airline_exists(conn, airline_id).await? {
        Ok(())
    } else {
        Err(DomainError::referential(
            ReferenceKind::Airline,
            format!("Airline {airline_id} does not exist"),
        ))
    }
}

/// Aircraft domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct AircraftService;

impl AircraftService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: AircraftInput,
    ) -> Result<Aircraft, DomainError> {
        let fields = input.into_fields()?;
        ensure_airline(conn, fields.airline_id).await?;
        let craft = aircraft::create_aircraft(conn, fields).await?;
        info!(
            aircraft_id = craft.id,
            airline_id = craft.airline_id,
            model = %craft.model,
            "aircraft.created"
        );
        Ok(craft)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Aircraft, DomainError> {
        aircraft::find_aircraft(conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Aircraft with its owning airline inline.
    pub async fn get_with_airline<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<AircraftWithAirline, DomainError> {
        projections::aircraft_with_airline(conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &AircraftFilter,
        page: Page,
    ) -> Result<Vec<Aircraft>, DomainError> {
        aircraft::list_aircraft(conn, filter, page).await
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        input: AircraftInput,
    ) -> Result<Aircraft, DomainError> {
        let fields = input.into_fields()?;
        self.get(conn, id).await?;
        ensure_airline(conn, fields.airline_id).await?;
        let craft = aircraft::update_aircraft(conn, id, fields).await?;
        info!(aircraft_id = id, "aircraft.updated");
        Ok(craft)
    }

    /// Delete and return the removed record. Refused while flights still
    /// reference the aircraft.
    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Aircraft, DomainError> {
        let craft = self.get(conn, id).await?;

        let flights = aircraft::scheduled_flights(conn, id).await?;
        if flights > 0 {
            return Err(DomainError::conflict(
                ConflictKind::HasDependents,
                format!("Aircraft {id} is still assigned to {flights} flights"),
            ));
        }

        if !aircraft::delete_aircraft(conn, id).await? {
            return Err(not_found(id));
        }
        info!(aircraft_id = id, "aircraft.deleted");
        Ok(craft)
    }
}
