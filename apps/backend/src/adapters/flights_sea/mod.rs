//! SeaORM adapter for the flights table.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::entities::flights;
use crate::query::{FlightFilter, FlightSort, Page};

pub mod dto;

pub use dto::FlightFields;

fn active(id: Option<i64>, dto: FlightFields) -> flights::ActiveModel {
    flights::ActiveModel {
        id: id.map_or(NotSet, Set),
        flight_number: Set(dto.flight_number),
        origin: Set(dto.origin),
        destination: Set(dto.destination),
        departure: Set(dto.departure),
        arrival: Set(dto.arrival),
        status: Set(dto.status),
        aircraft_id: Set(dto.aircraft_id),
        airline_id: Set(dto.airline_id),
    }
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FlightFields,
) -> Result<flights::Model, DbErr> {
    active(None, dto).insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<flights::Model>, DbErr> {
    flights::Entity::find_by_id(id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &FlightFilter,
    page: Page,
) -> Result<Vec<flights::Model>, DbErr> {
    let mut select = flights::Entity::find().filter(filter.condition());
    select = match filter.sort {
        Some(FlightSort::Departure) => select.order_by_asc(flights::Column::Departure),
        Some(FlightSort::Arrival) => select.order_by_asc(flights::Column::Arrival),
        None => select,
    };
    page.apply(select.order_by_asc(flights::Column::Id))
        .all(conn)
        .await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: FlightFields,
) -> Result<flights::Model, DbErr> {
    active(Some(id), dto).update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DbErr> {
    let res = flights::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}
