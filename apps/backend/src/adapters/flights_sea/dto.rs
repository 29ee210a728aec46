//! DTOs for flights_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct FlightFields {
    pub flight_number: i32,
    pub origin: String,
    pub destination: String,
    pub departure: OffsetDateTime,
    pub arrival: OffsetDateTime,
    pub status: String,
    pub aircraft_id: i64,
    pub airline_id: i64,
}
