//! Listing criteria shared by the adapters: explicit filter structs,
//! allow-listed sort keys and clamped pagination.

pub mod filters;
pub mod page;
pub mod sort;
pub mod text;

pub use filters::{AircraftFilter, AirlineFilter, DateRange, FlightFilter};
pub use page::Page;
pub use sort::{AirlineSort, FlightSort};
