//! DTOs for aircraft_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct AircraftFields {
    pub model: String,
    pub capacity: i32,
    pub last_inspection: OffsetDateTime,
    pub next_inspection: OffsetDateTime,
    pub airline_id: i64,
}
