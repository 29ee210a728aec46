//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps to
//! `DomainError` via `From<DbErr>`.

pub mod aircraft_sea;
pub mod airlines_sea;
pub mod flights_sea;
pub mod projections_sea;
pub mod reports_sea;
