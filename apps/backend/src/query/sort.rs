//! Allow-listed sort keys. Unknown keys parse to `None` and the listing keeps
//! its default id order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirlineSort {
    Name,
}

impl AirlineSort {
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightSort {
    Departure,
    Arrival,
}

impl FlightSort {
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "departure" => Some(Self::Departure),
            "arrival" => Some(Self::Arrival),
            _ => None,
        }
    }
}
