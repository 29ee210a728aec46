//! Nested read models ("complete info" views).
//!
//! Every view is assembled from a fixed number of queries: joined rows are
//! consolidated by primary key so an airline with N aircraft appears once
//! with N children, and flights are expanded with batched lookups keyed by
//! id instead of per-row queries.

use std::collections::{BTreeSet, HashMap};

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::projections_sea;
use crate::entities::{aircraft, airlines};
use crate::errors::domain::DomainError;

/// Airline reduced to its identifying columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineRef {
    pub id: i64,
    pub name: String,
    pub iata_code: String,
}

/// Aircraft as listed under its owning airline; no back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftSummary {
    pub id: i64,
    pub model: String,
    pub capacity: i32,
    #[serde(with = "crate::timestamps::flexible")]
    pub last_inspection: OffsetDateTime,
    #[serde(with = "crate::timestamps::flexible")]
    pub next_inspection: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineWithAircraft {
    pub id: i64,
    pub name: String,
    pub iata_code: String,
    pub aircraft: Vec<AircraftSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftWithAirline {
    pub id: i64,
    pub model: String,
    pub capacity: i32,
    #[serde(with = "crate::timestamps::flexible")]
    pub last_inspection: OffsetDateTime,
    #[serde(with = "crate::timestamps::flexible")]
    pub next_inspection: OffsetDateTime,
    pub airline_id: i64,
    pub airline: AirlineRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterAircraft {
    pub id: i64,
    pub model: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineWithRoster {
    pub id: i64,
    pub name: String,
    pub iata_code: String,
    pub aircraft: Vec<RosterAircraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightDetail {
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
    pub airline: AirlineWithRoster,
    pub aircraft: AircraftWithAirline,
}

pub async fn airlines_with_aircraft<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<AirlineWithAircraft>, DomainError> {
    let rows = projections_sea::airlines_with_fleet(conn).await?;
    Ok(rows
        .into_iter()
        .map(|(airline, fleet)| AirlineWithAircraft {
            id: airline.id,
            name: airline.name,
            iata_code: airline.iata_code,
            aircraft: fleet.into_iter().map(AircraftSummary::from).collect(),
        })
        .collect())
}

/// `None` when the aircraft does not exist.
pub async fn aircraft_with_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<AircraftWithAirline>, DomainError> {
    let row = projections_sea::aircraft_with_airline(conn, id).await?;
    Ok(row.and_then(|(craft, airline)| airline.map(|a| AircraftWithAirline::join(craft, a))))
}

pub async fn flights_expanded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<FlightDetail>, DomainError> {
    expand(conn, None).await
}

/// `None` when the flight does not exist.
pub async fn flight_expanded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<FlightDetail>, DomainError> {
    Ok(expand(conn, Some(id)).await?.into_iter().next())
}

async fn expand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    only: Option<i64>,
) -> Result<Vec<FlightDetail>, DomainError> {
    let rows = projections_sea::flights_with_airline(conn, only).await?;

    let aircraft_ids: BTreeSet<i64> = rows.iter().map(|(f, _)| f.aircraft_id).collect();
    let airline_ids: BTreeSet<i64> = rows.iter().map(|(f, _)| f.airline_id).collect();

    let aircraft: HashMap<i64, AircraftWithAirline> =
        projections_sea::aircraft_with_airline_in(conn, aircraft_ids.into_iter().collect())
            .await?
            .into_iter()
            .filter_map(|(craft, airline)| airline.map(|a| AircraftWithAirline::join(craft, a)))
            .map(|a| (a.id, a))
            .collect();

    let mut rosters: HashMap<i64, Vec<RosterAircraft>> = HashMap::new();
    for craft in projections_sea::fleets_of(conn, airline_ids.into_iter().collect()).await? {
        rosters
            .entry(craft.airline_id)
            .or_default()
            .push(RosterAircraft {
                id: craft.id,
                model: craft.model,
                capacity: craft.capacity,
            });
    }

    let details = rows
        .into_iter()
        .filter_map(|(flight, airline)| {
            let airline = airline?;
            let craft = aircraft.get(&flight.aircraft_id)?.clone();
            Some(FlightDetail {
                id: flight.id,
                flight_number: flight.flight_number,
                origin: flight.origin,
                destination: flight.destination,
                departure: flight.departure,
                arrival: flight.arrival,
                status: flight.status,
                aircraft_id: flight.aircraft_id,
                airline_id: flight.airline_id,
                airline: AirlineWithRoster {
                    aircraft: rosters.get(&airline.id).cloned().unwrap_or_default(),
                    id: airline.id,
                    name: airline.name,
                    iata_code: airline.iata_code,
                },
                aircraft: craft,
            })
        })
        .collect();

    Ok(details)
}

impl AircraftWithAirline {
    fn join(craft: aircraft::Model, airline: airlines::Model) -> Self {
        Self {
            id: craft.id,
            model: craft.model,
            capacity: craft.capacity,
            last_inspection: craft.last_inspection,
            next_inspection: craft.next_inspection,
            airline_id: craft.airline_id,
            airline: AirlineRef::from(airline),
        }
    }
}

impl From<airlines::Model> for AirlineRef {
    fn from(model: airlines::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            iata_code: model.iata_code,
        }
    }
}

impl From<aircraft::Model> for AircraftSummary {
    fn from(model: aircraft::Model) -> Self {
        Self {
            id: model.id,
            model: model.model,
            capacity: model.capacity,
            last_inspection: model.last_inspection,
            next_inspection: model.next_inspection,
        }
    }
}
