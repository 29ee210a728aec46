#![allow(dead_code)]

//! Row factories that go through the services, so seeded data obeys the
//! same validation as API writes.

use fleetdesk::repos::aircraft::Aircraft;
use fleetdesk::repos::airlines::Airline;
use fleetdesk::repos::flights::Flight;
use fleetdesk::services::aircraft::{AircraftInput, AircraftService};
use fleetdesk::services::airlines::{AirlineInput, AirlineService};
use fleetdesk::services::flights::{FlightInput, FlightService};
use sea_orm::ConnectionTrait;
use time::{Duration, OffsetDateTime};

pub async fn airline<C: ConnectionTrait + Send + Sync>(db: &C, name: &str, iata_code: &str) -> Airline {
    AirlineService::new()
        .create(
            db,
            AirlineInput {
                name: name.to_string(),
                iata_code: iata_code.to_string(),
            },
        )
        .await
        .expect("airline should be created")
}

pub async fn aircraft<C: ConnectionTrait + Send + Sync>(
    db: &C,
    airline_id: i64,
    model: &str,
    capacity: i32,
) -> Aircraft {
    AircraftService::new()
        .create(
            db,
            AircraftInput {
                model: model.to_string(),
                capacity,
                last_inspection: None,
                next_inspection: None,
                airline_id,
            },
        )
        .await
        .expect("aircraft should be created")
}

/// Flight lasting two hours from `departure`.
pub async fn flight<C: ConnectionTrait + Send + Sync>(
    db: &C,
    craft: &Aircraft,
    number: i32,
    route: (&str, &str),
    departure: OffsetDateTime,
) -> Flight {
    FlightService::new()
        .create(
            db,
            FlightInput {
                flight_number: number,
                origin: route.0.to_string(),
                destination: route.1.to_string(),
                departure,
                arrival: departure + Duration::hours(2),
                status: "scheduled".to_string(),
                aircraft_id: craft.id,
                airline_id: craft.airline_id,
            },
        )
        .await
        .expect("flight should be created")
}
