//! Aggregate reports over the joined tables.

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::reports_sea;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineModelCount {
    pub airline: String,
    pub model: String,
    pub total_aircraft: i64,
}

/// Aircraft model → number of flights flown with that model.
pub async fn aircraft_count_by_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<BTreeMap<String, i64>, DomainError> {
    let rows = reports_sea::flights_per_aircraft_model(conn).await?;
    Ok(rows.into_iter().collect())
}

/// Aircraft counted per (airline name, model), ordered by airline then model.
pub async fn aircraft_count_by_airline_and_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<AirlineModelCount>, DomainError> {
    let rows = reports_sea::aircraft_per_airline_and_model(conn).await?;
    Ok(rows
        .into_iter()
        .map(|(airline, model, total_aircraft)| AirlineModelCount {
            airline,
            model,
            total_aircraft,
        })
        .collect())
}

/// Airline name → number of flights it operates.
pub async fn flight_count_by_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<BTreeMap<String, i64>, DomainError> {
    let rows = reports_sea::flights_per_airline(conn).await?;
    Ok(rows.into_iter().collect())
}
