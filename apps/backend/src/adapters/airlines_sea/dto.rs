//! DTOs for airlines_sea adapter.

/// Column values written on insert and on whole-record update.
#[derive(Debug, Clone)]
pub struct AirlineFields {
    pub name: String,
    pub iata_code: String,
}

impl AirlineFields {
    pub fn new(name: impl Into<String>, iata_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iata_code: iata_code.into(),
        }
    }
}
